//! Common test utilities and fixtures for integration tests.
//!
//! Each test context gets its own throwaway data directory, so tests can
//! run in parallel and exercise persistence without touching real state.

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use uuid::Uuid;

use vimgym_core::Catalog;
use vimgym_server::store::ProgressStore;
use vimgym_server::{app, AppState};

/// Test context holding a running test server and its data directory.
pub struct TestContext {
    pub data_dir: PathBuf,
    server: TestServer,
}

impl TestContext {
    /// Create a context with the fixture catalog and a fresh data dir.
    pub fn new() -> Self {
        Self::with_setup(|_| {})
    }

    /// Create a context after running `prepare` against the data directory,
    /// e.g. to seed or corrupt persisted documents before startup.
    pub fn with_setup(prepare: impl FnOnce(&Path)) -> Self {
        let data_dir = std::env::temp_dir().join(format!("vimgym-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&data_dir).expect("create test data dir");
        prepare(&data_dir);

        let catalog = Catalog::from_json(fixtures::CATALOG).expect("fixture catalog is valid");
        Self::from_catalog(catalog, None, data_dir)
    }

    /// Create a context in the degraded no-catalog state.
    pub fn degraded(notice: &str) -> Self {
        let data_dir = std::env::temp_dir().join(format!("vimgym-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&data_dir).expect("create test data dir");
        Self::from_catalog(
            Catalog::empty(),
            Some(Arc::new(notice.to_string())),
            data_dir,
        )
    }

    fn from_catalog(catalog: Catalog, load_notice: Option<Arc<String>>, data_dir: PathBuf) -> Self {
        let store = ProgressStore::open(&data_dir).expect("open progress store");

        let state = AppState {
            catalog: Arc::new(catalog),
            store: Arc::new(Mutex::new(store)),
            load_notice,
        };

        let server = TestServer::new(app(state)).expect("start test server");

        Self { data_dir, server }
    }

    pub fn server(&self) -> &TestServer {
        &self.server
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.data_dir);
    }
}
