#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use exercise_service::{
    build_router,
    config::ExerciseConfig,
    services::{InMemoryUserRepository, UserRepository},
    startup::Application,
    AppState,
};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router over a store, driven with `oneshot`.
pub struct TestApp {
    pub router: Router,
}

/// A real listener on a random port, for tests that go over the network.
pub struct SpawnedApp {
    pub address: String,
    pub port: u16,
    pub state: AppState,
}

impl SpawnedApp {
    pub async fn spawn() -> Self {
        let mut config = ExerciseConfig::in_memory();
        config.common.port = 0; // Random port for testing

        let app = Application::build_with_repository(
            config,
            Arc::new(InMemoryUserRepository::new()),
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let state = app.state().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        SpawnedApp {
            address,
            port,
            state,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Response is not JSON ({}): {}", e, self.body))
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }

    pub fn with_repository(users: Arc<dyn UserRepository>) -> Self {
        let state = AppState {
            config: ExerciseConfig::in_memory(),
            users,
        };

        Self {
            router: build_router(state),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("Failed to encode form");

        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Create a user and return its generated id.
    pub async fn create_user(&self, username: &str) -> String {
        let response = self
            .post_form("/api/users", &[("username", username)])
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.json()["_id"]
            .as_str()
            .expect("Missing _id")
            .to_string()
    }

    pub async fn add_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: &str,
        date: Option<&str>,
    ) -> TestResponse {
        let mut form = vec![("description", description), ("duration", duration)];
        if let Some(date) = date {
            form.push(("date", date));
        }
        self.post_form(&format!("/api/users/{}/exercises", user_id), &form)
            .await
    }
}
