pub mod database;
pub mod metrics;
pub mod repository;

pub use database::{MongoDb, MongoUserRepository};
pub use metrics::{get_metrics, init_metrics};
pub use repository::{InMemoryUserRepository, UserRepository};
