/// Application-level result; domain errors are `LockGraphError` values carried
/// inside the `anyhow::Error` and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
