//! Database entities

use chrono::{DateTime, Utc};
use sqlx::FromRow;

// Re-export shared input types from flashcard-core
pub use flashcard_core::types::{FormData, MediaLinks, NewDeck, NewFlashcard};

/// A named collection of flashcards
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question/answer/hint belonging to a deck
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Flashcard {
    pub id: i64,
    pub deck_id: i64,
    pub question: String,
    pub answer: String,
    pub hint: Option<String>,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn media(&self) -> MediaLinks {
        MediaLinks {
            image_url: self.image_url.clone(),
            audio_url: self.audio_url.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

/// Aggregate quiz counters for one flashcard
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Progress {
    pub id: i64,
    pub card_id: i64,
    pub correct_count: i64,
    pub incorrect_count: i64,
    pub last_reviewed: DateTime<Utc>,
}

impl Progress {
    /// (correct, incorrect)
    pub fn counts(&self) -> (i64, i64) {
        (self.correct_count, self.incorrect_count)
    }

    pub fn total(&self) -> i64 {
        self.correct_count + self.incorrect_count
    }
}

/// Label attachable to flashcards
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
