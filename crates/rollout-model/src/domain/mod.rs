mod identity;
pub use identity::WorkerIdentity;

mod truncation;
pub use truncation::Truncation;

/// Number of steps in an episode.
///
/// Used for drawn targets, step limits and reported progress alike.
pub type StepCount = u64;
