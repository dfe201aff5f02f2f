//! Test fixtures and factory functions for creating test data.

use super::TestContext;

/// Sample cards used across tests: (question, answer, hint).
pub const GEOGRAPHY_CARDS: [(&str, &str, Option<&str>); 3] = [
    ("What is the capital of France?", "Paris", Some("City of Light")),
    ("What is the capital of Italy?", "Rome", None),
    ("What is the capital of Japan?", "Tokyo", Some("Formerly Edo")),
];

/// Create a deck holding [`GEOGRAPHY_CARDS`]; returns (deck_id, card_ids).
pub async fn geography_deck(ctx: &TestContext) -> (i64, Vec<i64>) {
    let deck_id = ctx.create_deck("Geography", "World capitals").await;

    let mut card_ids = Vec::with_capacity(GEOGRAPHY_CARDS.len());
    for (question, answer, hint) in GEOGRAPHY_CARDS {
        let id = ctx
            .db
            .create_flashcard(deck_id, question, answer, hint)
            .await
            .expect("Failed to create fixture card");
        card_ids.push(id);
    }

    (deck_id, card_ids)
}
