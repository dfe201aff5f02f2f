//! Input types shared by the console and web front ends.

use std::collections::HashMap;

use crate::error::{Result, ValidationError};

/// Decoded `application/x-www-form-urlencoded` body.
///
/// The first value wins when a key repeats. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = HashMap::new();
        for (key, value) in pairs {
            let value = value.into();
            if value.trim().is_empty() {
                continue;
            }
            fields.entry(key.into()).or_insert(value);
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.get(key).ok_or(ValidationError::MissingField(key))
    }
}

/// Validated input for creating a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeck {
    pub name: String,
    pub description: String,
}

impl NewDeck {
    /// `name` is required; a missing description becomes empty.
    pub fn from_form(form: &FormData) -> Result<Self> {
        Ok(Self {
            name: form.require("name")?.to_string(),
            description: form.get("description").unwrap_or_default().to_string(),
        })
    }
}

/// Optional media attached to a flashcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaLinks {
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
}

impl MediaLinks {
    pub fn from_form(form: &FormData) -> Self {
        let field = |key: &str| form.get(key).map(|value| value.trim().to_string());
        Self {
            image_url: field("image_url"),
            audio_url: field("audio_url"),
            video_url: field("video_url"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.audio_url.is_none() && self.video_url.is_none()
    }
}

/// Validated input for creating a flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
    pub hint: Option<String>,
    pub media: MediaLinks,
}

impl NewFlashcard {
    pub fn new(question: &str, answer: &str, hint: Option<&str>) -> Result<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(ValidationError::MissingField("question"));
        }
        if answer.is_empty() {
            return Err(ValidationError::MissingField("answer"));
        }
        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            hint: hint
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string),
            media: MediaLinks::default(),
        })
    }

    pub fn from_form(form: &FormData) -> Result<Self> {
        let card = Self::new(form.require("question")?, form.require("answer")?, form.get("hint"))?;
        Ok(Self {
            media: MediaLinks::from_form(form),
            ..card
        })
    }
}

/// Parse a deck or card id given as text.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}
