use crate::models::{ExerciseEntry, User, UserSummary};
use crate::services::UserRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for exercise-service");

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .name("username_lookup".to_string())
                    .build(),
            )
            .build();

        self.users()
            .create_index(username_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create username index on users collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on users.username");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn user_summaries(&self) -> Collection<UserSummary> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

/// `UserRepository` over the `users` collection. Exercise entries live in
/// each user document's `logs` array.
#[derive(Clone)]
pub struct MongoUserRepository {
    db: MongoDb,
}

impl MongoUserRepository {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create_user(&self, user: User) -> Result<User, AppError> {
        self.db
            .users()
            .insert_one(&user, None)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, "Failed to insert user: {}", e);
                AppError::from(e)
            })?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 1, "username": 1 })
            .build();

        let cursor = self
            .db
            .user_summaries()
            .find(None, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {}", e);
                AppError::from(e)
            })?;

        let users: Vec<UserSummary> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        self.db
            .users()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %id, "Failed to fetch user: {}", e);
                AppError::from(e)
            })
    }

    async fn append_exercise(
        &self,
        id: &str,
        entry: ExerciseEntry,
    ) -> Result<Option<User>, AppError> {
        let entry = mongodb::bson::to_bson(&entry)?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.db
            .users()
            .find_one_and_update(doc! { "_id": id }, doc! { "$push": { "logs": entry } }, options)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %id, "Failed to append exercise: {}", e);
                AppError::from(e)
            })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
