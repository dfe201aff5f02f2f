//! SQLite database operations

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{AppError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite, creating the database file if it does not exist
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Close every connection in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Deck Repository ===

    /// Insert a deck and return its id
    pub async fn create_deck(&self, name: &str, description: &str) -> Result<i64> {
        let now = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO decks (name, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(deck_id = id, name, "created deck");
        Ok(id)
    }

    /// Get deck by ID
    pub async fn get_deck(&self, deck_id: i64) -> Result<Option<Deck>> {
        let deck = sqlx::query_as::<_, Deck>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM decks
            WHERE id = ?1
            "#,
        )
        .bind(deck_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deck)
    }

    /// All decks in insertion order
    pub async fn list_decks(&self) -> Result<Vec<Deck>> {
        let decks = sqlx::query_as::<_, Deck>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM decks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(decks)
    }

    // === Flashcard Repository ===

    /// Insert a flashcard without media and return its id.
    ///
    /// `deck_id` is stored as given; callers check that the deck exists.
    pub async fn create_flashcard(
        &self,
        deck_id: i64,
        question: &str,
        answer: &str,
        hint: Option<&str>,
    ) -> Result<i64> {
        self.create_flashcard_with_media(deck_id, question, answer, hint, &MediaLinks::default())
            .await
    }

    /// Insert a flashcard together with its media links
    pub async fn create_flashcard_with_media(
        &self,
        deck_id: i64,
        question: &str,
        answer: &str,
        hint: Option<&str>,
        media: &MediaLinks,
    ) -> Result<i64> {
        let now = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO flashcards (
                deck_id, question, answer, hint, image_url, audio_url, video_url,
                created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            "#,
        )
        .bind(deck_id)
        .bind(question)
        .bind(answer)
        .bind(hint)
        .bind(media.image_url.as_deref())
        .bind(media.audio_url.as_deref())
        .bind(media.video_url.as_deref())
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(card_id = id, deck_id, "created flashcard");
        Ok(id)
    }

    pub async fn get_flashcard(&self, card_id: i64) -> Result<Option<Flashcard>> {
        let card = sqlx::query_as::<_, Flashcard>(
            r#"
            SELECT id, deck_id, question, answer, hint, image_url, audio_url, video_url,
                   created_at, updated_at
            FROM flashcards
            WHERE id = ?1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Delete a flashcard and its tag links, returning whether it existed.
    ///
    /// The progress row stays; ids are never reused, so it cannot attach to a
    /// later card.
    pub async fn delete_flashcard(&self, card_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM card_tags WHERE card_id = ?1")
            .bind(card_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM flashcards WHERE id = ?1")
            .bind(card_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(card_id, "deleted flashcard");
        }
        Ok(deleted)
    }

    /// Flashcards of a deck in insertion order; empty for unknown decks
    pub async fn list_flashcards(&self, deck_id: i64) -> Result<Vec<Flashcard>> {
        let cards = sqlx::query_as::<_, Flashcard>(
            r#"
            SELECT id, deck_id, question, answer, hint, image_url, audio_url, video_url,
                   created_at, updated_at
            FROM flashcards
            WHERE deck_id = ?1
            ORDER BY id
            "#,
        )
        .bind(deck_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    // === Progress Repository ===

    /// Count one answer for a card.
    ///
    /// The first answer creates the progress row; later answers increment it.
    /// A single upsert statement keeps concurrent answers for the same card
    /// from losing updates.
    pub async fn record_answer(&self, card_id: i64, is_correct: bool) -> Result<()> {
        let (correct, incorrect): (i64, i64) = if is_correct { (1, 0) } else { (0, 1) };

        sqlx::query(
            r#"
            INSERT INTO progress (card_id, correct_count, incorrect_count, last_reviewed)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (card_id) DO UPDATE SET
                correct_count = progress.correct_count + excluded.correct_count,
                incorrect_count = progress.incorrect_count + excluded.incorrect_count,
                last_reviewed = excluded.last_reviewed
            "#,
        )
        .bind(card_id)
        .bind(correct)
        .bind(incorrect)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!(card_id, is_correct, "recorded answer");
        Ok(())
    }

    /// Get progress for a card, if it was ever answered
    pub async fn get_progress(&self, card_id: i64) -> Result<Option<Progress>> {
        let progress = sqlx::query_as::<_, Progress>(
            r#"
            SELECT id, card_id, correct_count, incorrect_count, last_reviewed
            FROM progress
            WHERE card_id = ?1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(progress)
    }

    // === Tag Repository ===

    /// Insert a tag; duplicate names fail with a storage error
    pub async fn create_tag(&self, name: &str) -> Result<i64> {
        let id = sqlx::query("INSERT INTO tags (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(id)
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(tags)
    }

    /// Delete a tag together with its card links
    pub async fn delete_tag(&self, tag_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM card_tags WHERE tag_id = ?1")
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM tags WHERE id = ?1")
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Link a tag to a card; linking twice is a no-op
    pub async fn assign_tag(&self, card_id: i64, tag_id: i64) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO card_tags (card_id, tag_id) VALUES (?1, ?2)")
            .bind(card_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove a tag from a card, returning whether a link existed
    pub async fn unassign_tag(&self, card_id: i64, tag_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM card_tags WHERE card_id = ?1 AND tag_id = ?2")
            .bind(card_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn tags_for_card(&self, card_id: i64) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN card_tags ct ON t.id = ct.tag_id
            WHERE ct.card_id = ?1
            ORDER BY t.id
            "#,
        )
        .bind(card_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }

    pub async fn flashcards_for_tag(&self, tag_id: i64) -> Result<Vec<Flashcard>> {
        let cards = sqlx::query_as::<_, Flashcard>(
            r#"
            SELECT c.id, c.deck_id, c.question, c.answer, c.hint,
                   c.image_url, c.audio_url, c.video_url, c.created_at, c.updated_at
            FROM flashcards c
            JOIN card_tags ct ON c.id = ct.card_id
            WHERE ct.tag_id = ?1
            ORDER BY c.id
            "#,
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }
}
