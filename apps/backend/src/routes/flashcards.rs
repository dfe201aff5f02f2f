//! Flashcard pages

use flashcard_core::{Context, FormData, NewFlashcard, TemplateName};

use crate::error::{AppError, Result};
use crate::models::Flashcard;
use crate::AppState;

pub const NO_FLASHCARDS_MESSAGE: &str = "No Flashcards of this deck.";

fn card_items(cards: &[Flashcard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "<li>Q: {}<br> A: {} <br> Hint: {}</li>",
                card.question,
                card.answer,
                card.hint.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// GET /deck/{id}
///
/// Unknown decks list as empty rather than failing.
pub async fn list(state: &AppState, deck_id: i64) -> Result<String> {
    let cards = state.db.list_flashcards(deck_id).await?;

    let items = if cards.is_empty() {
        NO_FLASHCARDS_MESSAGE.to_string()
    } else {
        card_items(&cards)
    };
    let ctx = Context::new()
        .with("flashcards_list", items)
        .with("deck_id", deck_id);

    state.templates.render(TemplateName::FlashcardList, &ctx).await
}

/// GET /add_flashcard/{id}
pub async fn form(state: &AppState, deck_id: i64) -> Result<String> {
    let ctx = Context::new().with("deck_id", deck_id);
    state.templates.render(TemplateName::AddFlashcard, &ctx).await
}

/// POST /add_flashcard/{id}
pub async fn create(state: &AppState, deck_id: i64, form: &FormData) -> Result<String> {
    let card = NewFlashcard::from_form(form)?;

    if state.db.get_deck(deck_id).await?.is_none() {
        return Err(AppError::NotFound("Deck not found.".to_string()));
    }

    let card_id = state
        .db
        .create_flashcard_with_media(
            deck_id,
            &card.question,
            &card.answer,
            card.hint.as_deref(),
            &card.media,
        )
        .await?;
    tracing::info!(card_id, deck_id, has_media = !card.media.is_empty(), "flashcard added");

    let ctx = Context::new().with("message", "Flashcard added successfully!");
    state.templates.render(TemplateName::Success, &ctx).await
}
