pub mod exercises;
pub mod health;
pub mod landing;
pub mod users;

pub use exercises::{add_exercise, exercise_log, list_exercises};
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use landing::index;
pub use users::{create_user, list_users};
