//! # Domain Model
//!
//! A [`Joke`] is the only record this application knows about:
//!
//! ```json
//! { "jokeId": "joke-111", "question": "...", "answer": "..." }
//! ```
//!
//! ## Identity
//!
//! [`JokeId`] wraps a non-empty string. The only ways to get one are
//! [`JokeId::new`] and deserialization, and both reject the empty string, so a
//! `Joke` in hand always carries a usable id.
//!
//! ## Validation
//!
//! Request bodies arrive as untyped JSON. [`validate_joke`] is an allow-list
//! parser: it picks `jokeId`, `question` and `answer` (all strings), drops
//! everything else and reports any mismatch as one uniform [`ValidationError`].
//! It never panics and never errors out of band; callers branch on the result.

use crate::error::JokeIdError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const INVALID_JOKE_MESSAGE: &str = "Joke data is invalid. No joke!";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JokeId(String);

impl JokeId {
    pub fn new(id: impl Into<String>) -> Result<Self, JokeIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(JokeIdError);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JokeId {
    type Error = JokeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JokeId> for String {
    fn from(id: JokeId) -> Self {
        id.0
    }
}

impl AsRef<str> for JokeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    pub joke_id: JokeId,
    pub question: String,
    pub answer: String,
}

impl Joke {
    pub fn new(joke_id: JokeId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            joke_id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Rejection produced by [`validate_joke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    fn invalid_joke() -> Self {
        Self {
            message: INVALID_JOKE_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse untyped input into a [`Joke`], keeping only the recognized fields.
///
/// # Examples
/// ```
/// use jokeapp::model::validate_joke;
/// use serde_json::json;
///
/// let joke = validate_joke(&json!({
///     "jokeId": "j1",
///     "question": "Q",
///     "answer": "A",
///     "extra": "drop-me",
/// }))
/// .unwrap();
/// assert_eq!(joke.joke_id.as_str(), "j1");
///
/// let err = validate_joke(&json!({ "jokeId": 123 })).unwrap_err();
/// assert_eq!(err.message(), "Joke data is invalid. No joke!");
/// ```
pub fn validate_joke(input: &Value) -> Result<Joke, ValidationError> {
    let fields = input.as_object().ok_or_else(ValidationError::invalid_joke)?;
    let string_field = |name: &str| {
        fields
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(ValidationError::invalid_joke)
    };

    let joke_id = JokeId::new(string_field("jokeId")?)
        .map_err(|_| ValidationError::invalid_joke())?;
    let question = string_field("question")?;
    let answer = string_field("answer")?;

    Ok(Joke::new(joke_id, question, answer))
}
