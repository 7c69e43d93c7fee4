//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use coursehub_core::config::{AppConfig, DatabaseConfig, StorageConfig};
use coursehub_database::repositories::mock::{MockNotificationCounter, MockVideoStore};
use coursehub_entity::video::{Video, VideoType};
use coursehub_storage::StorageManager;

/// Upload ceiling used by tests: 1 MiB.
pub const TEST_MAX_UPLOAD: u64 = 1024 * 1024;

const BOUNDARY: &str = "coursehub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// In-memory video store behind the app
    pub videos: Arc<MockVideoStore>,
    /// In-memory notification counter behind the app
    pub counter: Arc<MockNotificationCounter>,
    /// Storage root; removed on drop
    pub storage_dir: TempDir,
}

impl TestApp {
    /// App in the development environment
    pub async fn new() -> Self {
        Self::with_environment("development").await
    }

    /// App in the given environment
    pub async fn with_environment(environment: &str) -> Self {
        let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");
        let root = storage_dir.path().to_string_lossy().to_string();

        let mut config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url: "postgres://unused@localhost/unused".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            storage: StorageConfig {
                data_root: root.clone(),
                max_upload_size_bytes: TEST_MAX_UPLOAD,
                ..Default::default()
            },
            logging: Default::default(),
        };
        config.server.environment = environment.to_string();
        config.storage.local.root_path = root;

        let storage = Arc::new(
            StorageManager::from_config(&config.storage)
                .await
                .expect("Failed to init storage"),
        );
        let videos = Arc::new(MockVideoStore::new());
        let counter = Arc::new(MockNotificationCounter::new());

        let state = coursehub_api::AppState::new(
            config,
            videos.clone(),
            counter.clone(),
            storage,
        );

        Self {
            router: coursehub_api::build_app(state),
            videos,
            counter,
            storage_dir,
        }
    }

    /// Insert a video directly into the store. Lower `age` is newer.
    pub async fn seed_video(&self, age: i64, title: &str, video_type: VideoType) -> Video {
        let at = Utc::now() - Duration::minutes(age);
        let id = Uuid::new_v4();
        let video = Video {
            id,
            title: title.to_string(),
            description: format!("Description of {title}"),
            video_type,
            category: None,
            access_code: video_type
                .requires_access_code()
                .then(|| "VIP-CODE".to_string()),
            is_active: true,
            file_name: format!("{id}.mp4"),
            storage_path: format!("videos/{id}.mp4"),
            mime_type: Some("video/mp4".to_string()),
            size_bytes: 3,
            duration: None,
            created_at: at,
            updated_at: at,
        };
        self.videos.insert(video.clone()).await;
        video
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST a multipart upload. `file` is `(file name, content type, data)`.
    pub async fn upload(
        &self,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
    ) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/api/admin/upload-video")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, file)))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Encode a multipart/form-data body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"videoFile\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` if not JSON
    pub body: Value,
}

impl TestResponse {
    /// Titles in a video listing, in order
    pub fn titles(&self) -> Vec<String> {
        self.body["videos"]
            .as_array()
            .map(|videos| {
                videos
                    .iter()
                    .filter_map(|v| v["title"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}
