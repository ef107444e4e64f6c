//! Shared test harness: an in-memory repository, a tempdir-backed local
//! storage, and token minting for the auth middleware.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use pictor_api::auth::AccessClaims;
use pictor_api::setup::build_router;
use pictor_api::AppState;
use pictor_core::{AppError, Config, Medium, NewMedium, StorageBackend};
use pictor_db::MediaRepository;
use pictor_storage::{LocalStorage, Storage};

pub const JWT_SECRET: &str = "integration-test-secret";

/// In-memory media repository backing the HTTP surface in tests.
#[derive(Default)]
pub struct InMemoryRepository {
    rows: Mutex<HashMap<Uuid, Medium>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: Uuid) -> Option<Medium> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl MediaRepository for InMemoryRepository {
    async fn insert(&self, record: NewMedium) -> Result<Medium, AppError> {
        let (thumbnail_url, thumbnail_width, thumbnail_height) = match record.thumbnail {
            Some(thumb) => (Some(thumb.url), Some(thumb.width), Some(thumb.height)),
            None => (None, None, None),
        };

        let medium = Medium {
            id: record.id,
            content_type: record.content_type,
            url: record.url,
            width: record.width,
            height: record.height,
            description: record.description,
            thumbnail_url,
            thumbnail_width,
            thumbnail_height,
        };

        self.rows.lock().unwrap().insert(medium.id, medium.clone());
        Ok(medium)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Medium>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update_description(
        &self,
        id: Uuid,
        description: &str,
    ) -> Result<Option<Medium>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            row.description = Some(description.to_string());
            row.clone()
        }))
    }
}

/// A running application over fakes: tempdir blobs, in-memory rows.
pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryRepository>,
    storage_root: tempfile::TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let storage_root = tempfile::tempdir().expect("create storage tempdir");
        let base_path = storage_root.path().join("blobs");

        let storage = LocalStorage::new(base_path, "http://localhost:9000/blobs".to_string())
            .await
            .expect("create local storage");
        let repository = Arc::new(InMemoryRepository::new());

        let state = Arc::new(AppState::new(
            test_config(),
            repository.clone() as Arc<dyn MediaRepository>,
            Arc::new(storage) as Arc<dyn Storage>,
        ));
        let app = build_router(state).expect("Failed to build router");
        let server =
            TestServer::new(app.into_make_service()).expect("Failed to create test server");

        TestApp {
            server,
            repository,
            storage_root,
        }
    }

    /// Filesystem path a storage key resolves to.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.storage_root.path().join("blobs").join(key)
    }
}

fn test_config() -> Config {
    Config {
        server_port: 4000,
        cors_origins: vec!["*".to_string()],
        database_url: "postgres://unused-in-tests".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        jwt_secret: JWT_SECRET.to_string(),
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        s3_url_base: None,
        local_storage_path: None,
        local_storage_base_url: None,
        max_file_size_bytes: 10 * 1024 * 1024,
    }
}

/// Mint a token signed with the test secret, expiring in an hour.
pub fn mint_token(sub: Option<Uuid>, scope: &str) -> String {
    token_with_exp(sub, scope, now_epoch() + 3600)
}

/// Mint an already-expired token.
pub fn expired_token(sub: Option<Uuid>, scope: &str) -> String {
    token_with_exp(sub, scope, now_epoch() - 3600)
}

/// Token for a regular user allowed to create and update media.
pub fn write_token() -> String {
    mint_token(Some(Uuid::new_v4()), "write:media")
}

fn token_with_exp(sub: Option<Uuid>, scope: &str, exp: i64) -> String {
    let claims = AccessClaims {
        sub,
        scope: scope.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("sign test token")
}

fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs() as i64
}
