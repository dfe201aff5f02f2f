//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext with a private in-memory database and the shipped templates
//! - Helper functions for creating test data

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use flashcards_backend::config::Config;
use flashcards_backend::db::Database;
use flashcards_backend::{build_router, AppState};

/// Test context containing a migrated database and the web router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context backed by `sqlite::memory:`.
    ///
    /// # Panics
    /// Panics if the database cannot be opened or migrated.
    pub async fn new() -> Self {
        let db = Database::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let state = AppState::new(db.clone(), &test_config());
        let app = build_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Create a deck and return its ID.
    pub async fn create_deck(&self, name: &str, description: &str) -> i64 {
        self.db
            .create_deck(name, description)
            .await
            .expect("Failed to create test deck")
    }

    /// Create a flashcard and return its ID.
    pub async fn create_flashcard(&self, deck_id: i64, question: &str, answer: &str) -> i64 {
        self.db
            .create_flashcard(deck_id, question, answer, None)
            .await
            .expect("Failed to create test flashcard")
    }

    /// Number of progress rows stored for a card.
    pub async fn progress_rows(&self, card_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM progress WHERE card_id = ?1")
            .bind(card_id)
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count progress rows")
    }
}

/// Configuration pointing at the templates and static files in this crate.
pub fn test_config() -> Config {
    let root = env!("CARGO_MANIFEST_DIR");
    Config {
        template_dir: format!("{}/templates", root).into(),
        static_dir: format!("{}/static", root).into(),
        ..Config::default()
    }
}
