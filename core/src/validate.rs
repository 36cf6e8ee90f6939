//! Creation-input validation.
//!
//! Rules run in a fixed order and the first one that fails is reported.

use crate::error::{ValidationFailure, ValidationFailureKind};
use crate::types::NewItemInput;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 10;

/// A creation payload that passed every rule. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    name: String,
    is_active: bool,
}

impl ValidatedItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn into_parts(self) -> (String, bool) {
        (self.name, self.is_active)
    }
}

type Rule = fn(&str) -> Option<ValidationFailureKind>;

const NAME_RULES: [Rule; 4] = [required, min_len, max_len, alphabetic];

fn required(name: &str) -> Option<ValidationFailureKind> {
    name.is_empty().then_some(ValidationFailureKind::Required)
}

fn min_len(name: &str) -> Option<ValidationFailureKind> {
    (name.chars().count() < MIN_NAME_LEN).then_some(ValidationFailureKind::TooShort)
}

fn max_len(name: &str) -> Option<ValidationFailureKind> {
    (name.chars().count() > MAX_NAME_LEN).then_some(ValidationFailureKind::TooLong)
}

fn alphabetic(name: &str) -> Option<ValidationFailureKind> {
    (!name.chars().all(|c| c.is_ascii_alphabetic()))
        .then_some(ValidationFailureKind::NotAlphabetic)
}

/// Check `input` against the name rules.
pub fn validate(input: &NewItemInput) -> Result<ValidatedItem, ValidationFailure> {
    if let Some(kind) = NAME_RULES.iter().find_map(|rule| rule(&input.name)) {
        return Err(ValidationFailure::new("name", kind));
    }
    Ok(ValidatedItem {
        name: input.name.clone(),
        is_active: input.is_active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> NewItemInput {
        NewItemInput {
            name: name.to_string(),
            is_active: false,
        }
    }

    fn kind_of(name: &str) -> Option<ValidationFailureKind> {
        validate(&input(name)).err().map(|f| f.kind)
    }

    #[test]
    fn accepts_names_within_bounds() {
        for name in ["Foo", "abcdefghij", "Widget"] {
            let ok = validate(&input(name)).unwrap();
            assert_eq!(ok.name(), name);
        }
    }

    #[test]
    fn keeps_active_flag() {
        let ok = validate(&NewItemInput {
            name: "Foo".to_string(),
            is_active: true,
        })
        .unwrap();
        assert!(ok.is_active());
    }

    #[test]
    fn empty_name_is_required() {
        assert_eq!(kind_of(""), Some(ValidationFailureKind::Required));
    }

    #[test]
    fn short_name_is_too_short() {
        assert_eq!(kind_of("ab"), Some(ValidationFailureKind::TooShort));
    }

    #[test]
    fn long_name_is_too_long() {
        assert_eq!(kind_of("TooLongName"), Some(ValidationFailureKind::TooLong));
    }

    #[test]
    fn digits_are_not_alphabetic() {
        assert_eq!(kind_of("abc123"), Some(ValidationFailureKind::NotAlphabetic));
        assert_eq!(kind_of("two words"), Some(ValidationFailureKind::NotAlphabetic));
    }

    #[test]
    fn first_failing_rule_wins() {
        // Too short and not alphabetic: length is checked first.
        assert_eq!(kind_of("1"), Some(ValidationFailureKind::TooShort));
        // Too long and not alphabetic.
        assert_eq!(kind_of("12345678901"), Some(ValidationFailureKind::TooLong));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, ten bytes: passes length, fails the letter rule.
        assert_eq!(kind_of("ééééé"), Some(ValidationFailureKind::NotAlphabetic));
    }

    #[test]
    fn validation_is_deterministic() {
        assert_eq!(validate(&input("ab")), validate(&input("ab")));
    }
}
