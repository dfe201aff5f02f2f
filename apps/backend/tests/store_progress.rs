//! Progress upsert tests.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;
use flashcards_backend::db::Database;

#[tokio::test]
async fn test_unanswered_card_has_no_progress() {
    let ctx = TestContext::new().await;
    let (_, cards) = fixtures::geography_deck(&ctx).await;

    assert!(ctx.db.get_progress(cards[0]).await.unwrap().is_none());
    assert_eq!(ctx.progress_rows(cards[0]).await, 0);
}

#[tokio::test]
async fn test_first_answer_creates_record() {
    let ctx = TestContext::new().await;
    let (_, cards) = fixtures::geography_deck(&ctx).await;

    ctx.db.record_answer(cards[0], true).await.unwrap();
    ctx.db.record_answer(cards[1], false).await.unwrap();

    let first = ctx.db.get_progress(cards[0]).await.unwrap().unwrap();
    assert_eq!(first.card_id, cards[0]);
    assert_eq!(first.counts(), (1, 0));
    let second = ctx.db.get_progress(cards[1]).await.unwrap().unwrap();
    assert_eq!(second.counts(), (0, 1));
}

/// Counters match the answers given, and only one row exists per card.
#[tokio::test]
async fn test_repeated_answers_accumulate() {
    let ctx = TestContext::new().await;
    let (_, cards) = fixtures::geography_deck(&ctx).await;
    let answers = [true, false, true, true, false, true, true];

    for answer in answers {
        ctx.db.record_answer(cards[0], answer).await.unwrap();
    }

    let progress = ctx.db.get_progress(cards[0]).await.unwrap().unwrap();
    assert_eq!(progress.counts(), (5, 2));
    assert_eq!(progress.total(), answers.len() as i64);
    assert_eq!(ctx.progress_rows(cards[0]).await, 1);
    assert!(ctx.db.get_progress(cards[1]).await.unwrap().is_none());
}

/// The final counts do not depend on answer order.
#[tokio::test]
async fn test_answer_order_does_not_matter() {
    let ctx = TestContext::new().await;
    let (_, cards) = fixtures::geography_deck(&ctx).await;

    for answer in [true, true, false, false, false] {
        ctx.db.record_answer(cards[0], answer).await.unwrap();
    }
    for answer in [false, true, false, true, false] {
        ctx.db.record_answer(cards[1], answer).await.unwrap();
    }

    let a = ctx.db.get_progress(cards[0]).await.unwrap().unwrap();
    let b = ctx.db.get_progress(cards[1]).await.unwrap().unwrap();
    assert_eq!(a.counts(), b.counts());
    assert_eq!(a.counts(), (2, 3));
}

#[tokio::test]
async fn test_answer_refreshes_last_reviewed() {
    let ctx = TestContext::new().await;
    let (_, cards) = fixtures::geography_deck(&ctx).await;

    ctx.db.record_answer(cards[0], true).await.unwrap();
    let before = ctx.db.get_progress(cards[0]).await.unwrap().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    ctx.db.record_answer(cards[0], false).await.unwrap();
    let after = ctx.db.get_progress(cards[0]).await.unwrap().unwrap();

    assert_eq!(before.id, after.id);
    assert!(after.last_reviewed > before.last_reviewed);
}

/// Concurrent answers for one card on a multi-connection pool are all counted.
#[tokio::test]
async fn test_concurrent_answers_are_not_lost() {
    let path = std::env::temp_dir().join(format!(
        "flashcards-progress-{}-{}.db",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let url = format!("sqlite://{}", path.display());

    let db = Database::connect(&url).await.unwrap();
    db.run_migrations().await.unwrap();
    let deck_id = db.create_deck("Race", "").await.unwrap();
    let card_id = db
        .create_flashcard(deck_id, "Fast?", "Yes", None)
        .await
        .unwrap();

    let db = Arc::new(db);
    let mut tasks = Vec::new();
    for i in 0..40 {
        let db = db.clone();
        tasks.push(tokio::spawn(async move {
            db.record_answer(card_id, i % 4 != 0).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let progress = db.get_progress(card_id).await.unwrap().unwrap();
    assert_eq!(progress.counts(), (30, 10));

    db.close().await;
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }
}
