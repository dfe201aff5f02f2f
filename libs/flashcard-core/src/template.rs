//! Placeholder substitution for HTML templates.
//!
//! Templates are plain text containing markers of the exact form `{{ key }}`
//! (one space on each side). Rendering replaces every marker whose key is
//! present in the [`Context`] with the coerced value. There is no nesting,
//! iteration, conditional logic or escaping.

use std::collections::BTreeMap;
use std::fmt;

/// Named template resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    DeckList,
    FlashcardList,
    AddDeck,
    AddFlashcard,
    Success,
    Error,
    Index,
}

impl TemplateName {
    pub const ALL: [TemplateName; 7] = [
        Self::DeckList,
        Self::FlashcardList,
        Self::AddDeck,
        Self::AddFlashcard,
        Self::Success,
        Self::Error,
        Self::Index,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeckList => "deck_list",
            Self::FlashcardList => "flashcard_list",
            Self::AddDeck => "add_deck",
            Self::AddFlashcard => "add_flashcard",
            Self::Success => "success",
            Self::Error => "error",
            Self::Index => "index",
        }
    }

    /// File name of the resource inside the template directory.
    pub fn file_name(self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can be placed into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    Text(String),
    Integer(i64),
    /// Leaves the placeholder in the output untouched.
    Omitted,
}

impl ContextValue {
    /// Coerce to the substituted text; `None` for [`ContextValue::Omitted`].
    pub fn coerce(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Omitted => None,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Omitted)
    }
}

/// Key/value set used to fill a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys whose values were not substituted.
    pub fn omitted_keys(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, value)| matches!(value, ContextValue::Omitted))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// The marker that `key` is substituted for.
pub fn placeholder(key: &str) -> String {
    format!("{{{{ {} }}}}", key)
}

/// Substitute every `{{ key }}` marker found in `context`.
///
/// Markers without a matching key, and keys holding [`ContextValue::Omitted`],
/// are left in the output verbatim.
pub fn render(template: &str, context: &Context) -> String {
    let mut content = template.to_string();
    for (key, value) in context.iter() {
        if let Some(text) = value.coerce() {
            content = content.replace(&placeholder(key), &text);
        }
    }
    content
}
