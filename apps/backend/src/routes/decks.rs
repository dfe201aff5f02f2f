//! Deck pages

use flashcard_core::{Context, FormData, NewDeck, TemplateName};

use crate::error::Result;
use crate::models::Deck;
use crate::AppState;

pub const NO_DECKS_MESSAGE: &str = "No decks available. Please add some decks.";

fn deck_items(decks: &[Deck]) -> String {
    decks
        .iter()
        .map(|deck| {
            format!(
                r#"<li><a href="/deck/{}">{}</a>: {}</li>"#,
                deck.id, deck.name, deck.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// GET /
pub async fn list(state: &AppState) -> Result<String> {
    let decks = state.db.list_decks().await?;

    let ctx = if decks.is_empty() {
        Context::new()
            .with("decks_list", "")
            .with("message", NO_DECKS_MESSAGE)
    } else {
        Context::new()
            .with("decks_list", deck_items(&decks))
            .with("message", "")
    };

    state.templates.render(TemplateName::DeckList, &ctx).await
}

/// GET /add_deck
pub async fn form(state: &AppState) -> Result<String> {
    state
        .templates
        .render(TemplateName::AddDeck, &Context::new())
        .await
}

/// POST /add_deck
pub async fn create(state: &AppState, form: &FormData) -> Result<String> {
    let deck = NewDeck::from_form(form)?;
    let deck_id = state.db.create_deck(&deck.name, &deck.description).await?;
    tracing::info!(deck_id, name = %deck.name, "deck added");

    let ctx = Context::new().with("message", "Deck added successfully!");
    state.templates.render(TemplateName::Success, &ctx).await
}
