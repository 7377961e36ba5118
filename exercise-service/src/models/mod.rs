pub mod exercise;
pub mod user;

pub use exercise::{ExerciseEntry, LogFilter};
pub use user::{User, UserSummary};
