//! Replaceable capabilities the episode loop depends on.
//!
//! The runner never touches randomness, clocks or delays directly: each of them sits behind a
//! small trait so tests can swap in seeded draws and simulated time without changing the loop.
mod clock;
pub use clock::{Clock, TokioClock};

mod draw;
pub use draw::{FixedDraw, SeededDraw, StepDraw, UniformDraw};

mod step;
pub use step::{SleepExecutor, StepError, StepExecutor};
