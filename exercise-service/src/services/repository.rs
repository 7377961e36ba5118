use crate::models::{ExerciseEntry, User, UserSummary};
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::Mutex;

/// Persistence for user records and their embedded exercise logs.
///
/// Lookups by id return `None` for unknown users; callers decide how to
/// surface that.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, AppError>;
    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError>;
    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError>;
    /// Append an entry to the user's log and return the updated record.
    async fn append_exercise(
        &self,
        id: &str,
        entry: ExerciseEntry,
    ) -> Result<Option<User>, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}

/// Process-local store; users are kept in creation order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, AppError> {
        self.users
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("User store mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        self.lock()?.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(self.lock()?.iter().map(User::summary).collect())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.lock()?.iter().find(|user| user.id == id).cloned())
    }

    async fn append_exercise(
        &self,
        id: &str,
        entry: ExerciseEntry,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.lock()?;
        Ok(users.iter_mut().find(|user| user.id == id).map(|user| {
            user.logs.push(entry);
            user.clone()
        }))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
