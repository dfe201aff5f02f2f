//! Request routing for the web front end.
//!
//! Every page request is resolved into a [`Route`] by matching on the method
//! and path segments, then dispatched to a handler that returns HTML. Not-found
//! and validation failures are rendered with the `error` template and a 200
//! status; storage and template failures become 500 responses.

pub mod assets;
pub mod decks;
pub mod flashcards;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::Html,
};
use flashcard_core::{parse_id, Context, FormData, TemplateName, ValidationError};
use percent_encoding::percent_decode_str;

use crate::error::{AppError, Result};
use crate::AppState;

/// Every page the web front end knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET /
    DeckList,
    /// GET /deck/{id}
    DeckFlashcards { deck_id: i64 },
    /// GET /add_deck
    AddDeckForm,
    /// POST /add_deck
    AddDeckSubmit,
    /// GET /add_flashcard/{id}
    AddFlashcardForm { deck_id: i64 },
    /// POST /add_flashcard/{id}
    AddFlashcardSubmit { deck_id: i64 },
    /// GET /index.html
    Index,
    NotFound,
}

impl Route {
    /// Resolve a method and path. Segments are percent-decoded before
    /// matching; a non-integer id segment is a validation error.
    pub fn resolve(method: &Method, path: &str) -> std::result::Result<Self, ValidationError> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let decoded: Vec<String> = trimmed
            .split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

        let route = match (method.as_str(), segments.as_slice()) {
            ("GET", [""]) => Self::DeckList,
            ("GET", ["deck", id]) => Self::DeckFlashcards {
                deck_id: parse_id(id)?,
            },
            ("GET", ["index.html"]) => Self::Index,
            ("GET", ["add_deck"]) => Self::AddDeckForm,
            ("POST", ["add_deck"]) => Self::AddDeckSubmit,
            ("GET", ["add_flashcard", id]) => Self::AddFlashcardForm {
                deck_id: parse_id(id)?,
            },
            ("POST", ["add_flashcard", id]) => Self::AddFlashcardSubmit {
                deck_id: parse_id(id)?,
            },
            _ => Self::NotFound,
        };

        Ok(route)
    }
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// The decoder replaces invalid UTF-8 with U+FFFD instead of failing, so a
/// replacement character in the output marks the body as malformed.
pub fn parse_form(body: &[u8]) -> std::result::Result<FormData, ValidationError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| ValidationError::MalformedForm(e.to_string()))?;

    let lossy = |text: &str| text.contains(char::REPLACEMENT_CHARACTER);
    if let Some((key, _)) = pairs.iter().find(|(key, value)| lossy(key) || lossy(value)) {
        return Err(ValidationError::MalformedForm(format!(
            "invalid UTF-8 in field {:?}",
            key
        )));
    }

    Ok(FormData::from_pairs(pairs))
}

/// Fallback handler serving every page route
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Html<String>> {
    let path = uri.path();

    let outcome = match Route::resolve(&method, path) {
        Ok(route) => {
            tracing::debug!(?route, "resolved route");
            handle(&state, route, &body).await
        }
        Err(err) => Err(err.into()),
    };

    match outcome {
        Ok(html) => Ok(Html(html)),
        Err(err) if err.is_user_facing() => {
            tracing::warn!(%method, path, error = %err, "rendering error page");
            let ctx = Context::new().with("message", err.user_message());
            let html = state.templates.render(TemplateName::Error, &ctx).await?;
            Ok(Html(html))
        }
        Err(err) => Err(err),
    }
}

async fn handle(state: &AppState, route: Route, body: &[u8]) -> Result<String> {
    match route {
        Route::DeckList => decks::list(state).await,
        Route::DeckFlashcards { deck_id } => flashcards::list(state, deck_id).await,
        Route::AddDeckForm => decks::form(state).await,
        Route::AddDeckSubmit => decks::create(state, &parse_form(body)?).await,
        Route::AddFlashcardForm { deck_id } => flashcards::form(state, deck_id).await,
        Route::AddFlashcardSubmit { deck_id } => {
            flashcards::create(state, deck_id, &parse_form(body)?).await
        }
        Route::Index => {
            state
                .templates
                .render(TemplateName::Index, &Context::new())
                .await
        }
        Route::NotFound => Err(AppError::NotFound("Page not found.".to_string())),
    }
}
