use crate::error::InvalidId;
use serde_json::Value;
use std::fmt;

/// Item ids address keys of the store document, where `/` is reserved as the
/// path separator.
const RESERVED_SEPARATOR: char = '/';

/// A checked item id: non-empty, without `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ItemId {
    type Error = InvalidId;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        if id.is_empty() {
            return Err(InvalidId::Blank);
        }
        if id.contains(RESERVED_SEPARATOR) {
            return Err(InvalidId::ReservedSeparator(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check an id of unknown shape, e.g. one lifted out of a request body.
pub fn assert_valid_id(id: &Value) -> Result<ItemId, InvalidId> {
    match id {
        Value::String(s) => ItemId::try_from(s.as_str()),
        other => Err(InvalidId::NotAString(json_type_name(other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_string_ids() {
        let err = assert_valid_id(&json!(123)).unwrap_err();
        assert_eq!(err.to_string(), "Expected id to be a string, but got 'number'.");

        let err = assert_valid_id(&json!(null)).unwrap_err();
        assert_eq!(err, InvalidId::NotAString("null"));
    }

    #[test]
    fn rejects_blank_ids() {
        let err = assert_valid_id(&json!("")).unwrap_err();
        assert_eq!(err.to_string(), "id cannot be blank");
    }

    #[test]
    fn rejects_the_reserved_separator() {
        let err = ItemId::try_from("this/is/invalid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The '/' character is not allowed in item ids. Invalid value was 'this/is/invalid'."
        );
    }

    #[test]
    fn accepts_plain_ids() {
        let id = assert_valid_id(&json!("item-111")).unwrap();
        assert_eq!(id.as_str(), "item-111");
    }
}
