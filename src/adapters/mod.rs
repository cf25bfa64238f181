/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: lockfile and manifest
/// reading, report rendering, and console/file output.
pub mod outbound;
