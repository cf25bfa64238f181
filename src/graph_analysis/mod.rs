/// Graph analysis domain layer
///
/// Pure business logic over the lock-graph: the model itself and the
/// analyses run against it. Nothing in here performs I/O.
pub mod domain;
pub mod services;
