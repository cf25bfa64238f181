/// Use cases module containing application business logic orchestration
mod analyze_lockfile;

pub use analyze_lockfile::AnalyzeLockfileUseCase;
