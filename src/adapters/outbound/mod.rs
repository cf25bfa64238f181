/// Outbound adapters - filesystem, console and report formatters
pub mod console;
pub mod filesystem;
pub mod formatters;
