//! Common test utilities for integration tests.
//!
//! Everything runs in-process against the router: the catalog is
//! in-memory and each TestContext gets fresh progress/session stores, so
//! no external services are needed.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use vocab_backend::{build_router, AppState};
use vocab_core::{WordCatalog, WordEntry};

/// Test context holding the application state behind the router.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Context over the built-in word catalog.
    pub fn new() -> Self {
        Self {
            state: AppState::with_builtin_catalog(),
        }
    }

    /// Context over a purpose-built word set, for tests that need to know
    /// exactly which words a session can draw.
    pub fn with_words(entries: Vec<WordEntry>) -> Self {
        Self {
            state: AppState::new(WordCatalog::new(entries)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Spin up an in-process test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
