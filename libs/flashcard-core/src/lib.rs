//! Core flashcard library shared by the console and web front ends.
//!
//! Provides:
//! - Template rendering with `{{ key }}` placeholder substitution
//! - Form input validation for decks and flashcards
//! - Answer matching for quiz sessions

pub mod error;
pub mod matching;
pub mod template;
pub mod types;

pub use error::{Result, ValidationError};
pub use matching::answers_match;
pub use template::{render, Context, ContextValue, TemplateName};
pub use types::{parse_id, FormData, MediaLinks, NewDeck, NewFlashcard};
