//! Fresh joke ids.
//!
//! [`UuidGenerator::create`] hands out random v4 UUIDs. Tests use
//! [`UuidGenerator::create_null`] to get predictable ids instead.

use crate::error::{JokeAppError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;
use uuid::Uuid;

pub const NULL_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// What a null generator returns.
#[derive(Debug, Clone, Default)]
pub enum NullUuid {
    /// Always [`NULL_UUID`].
    #[default]
    Default,
    /// Always the given value.
    Fixed(String),
    /// The given values, one per call, then an error.
    Sequence(Vec<String>),
}

#[derive(Debug)]
enum Source {
    Random,
    Fixed(String),
    Sequence(Mutex<VecDeque<String>>),
}

#[derive(Debug)]
pub struct UuidGenerator {
    source: Source,
}

impl UuidGenerator {
    pub fn create() -> Self {
        Self {
            source: Source::Random,
        }
    }

    pub fn create_null(options: NullUuid) -> Self {
        let source = match options {
            NullUuid::Default => Source::Fixed(NULL_UUID.to_string()),
            NullUuid::Fixed(uuid) => Source::Fixed(uuid),
            NullUuid::Sequence(uuids) => Source::Sequence(Mutex::new(uuids.into())),
        };
        Self { source }
    }

    pub fn uuid_v4(&self) -> Result<String> {
        match &self.source {
            Source::Random => Ok(Uuid::new_v4().to_string()),
            Source::Fixed(uuid) => Ok(uuid.clone()),
            Source::Sequence(uuids) => uuids.lock().pop_front().ok_or_else(|| {
                JokeAppError::Uuid("Null instance ran out of configured Uuids".to_string())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_instance_generates_distinct_v4_uuids() {
        let generator = UuidGenerator::create();

        let first = generator.uuid_v4().unwrap();
        let second = generator.uuid_v4().unwrap();

        assert_ne!(first, second);
        assert_eq!(Uuid::parse_str(&first).unwrap().get_version_num(), 4);
    }

    #[test]
    fn null_instance_defaults_to_the_nil_uuid() {
        let generator = UuidGenerator::create_null(NullUuid::default());
        assert_eq!(generator.uuid_v4().unwrap(), NULL_UUID);
        assert_eq!(generator.uuid_v4().unwrap(), NULL_UUID);
    }

    #[test]
    fn null_instance_repeats_a_fixed_value() {
        let generator = UuidGenerator::create_null(NullUuid::Fixed("joke-111".to_string()));
        assert_eq!(generator.uuid_v4().unwrap(), "joke-111");
        assert_eq!(generator.uuid_v4().unwrap(), "joke-111");
    }

    #[test]
    fn null_instance_walks_a_sequence_then_fails() {
        let generator = UuidGenerator::create_null(NullUuid::Sequence(vec![
            "uuid-1".to_string(),
            "uuid-2".to_string(),
        ]));

        assert_eq!(generator.uuid_v4().unwrap(), "uuid-1");
        assert_eq!(generator.uuid_v4().unwrap(), "uuid-2");
        let err = generator.uuid_v4().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Uuid: Null instance ran out of configured Uuids"
        );
    }
}
