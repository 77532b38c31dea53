#![forbid(unsafe_code)]

//! Slot validators.
//!
//! Each editable mask position carries a tag character; the tag selects the
//! predicate deciding which input characters the slot accepts. The lookup is
//! total: a tag with no registered validator resolves to [`SlotValidator::Never`],
//! so an unrecognized tag behaves as dead space that rejects all input rather
//! than an error.

use std::collections::HashMap;

/// Acceptance predicate for one editable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotValidator {
    /// Accepts any decimal digit `0`–`9`.
    AnyDigit,

    /// Accepts a decimal digit whose value is at most the bound.
    DigitAtMost(u8),

    /// Rejects every character. The table's default for unknown tags.
    Never,

    /// Host-supplied predicate.
    Custom(fn(char) -> bool),
}

impl SlotValidator {
    /// Test whether `input` is acceptable for this slot. Pure.
    #[must_use]
    pub fn accepts(&self, input: char) -> bool {
        match self {
            Self::AnyDigit => input.is_ascii_digit(),
            Self::DigitAtMost(max) => input.to_digit(10).is_some_and(|d| d <= u32::from(*max)),
            Self::Never => false,
            Self::Custom(predicate) => predicate(input),
        }
    }
}

/// Mapping from slot tag to validator, with a total lookup.
#[derive(Debug, Clone, Default)]
pub struct ValidatorTable {
    entries: HashMap<char, SlotValidator>,
}

impl ValidatorTable {
    /// A table with no registered tags; every slot rejects all input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock digit-kind table: `'9'` accepts any digit, `'1'`–`'8'`
    /// accept digits up to the tag's own value.
    #[must_use]
    pub fn digits() -> Self {
        let mut table = Self::empty();
        table.register('9', SlotValidator::AnyDigit);
        for bound in 1..=8u8 {
            table.register(
                char::from(b'0' + bound),
                SlotValidator::DigitAtMost(bound),
            );
        }
        table
    }

    /// Register (or override) the validator for `tag`.
    pub fn register(&mut self, tag: char, validator: SlotValidator) {
        self.entries.insert(tag, validator);
    }

    /// Resolve `tag` to its validator. Never fails: unknown tags resolve to
    /// [`SlotValidator::Never`].
    #[must_use]
    pub fn lookup(&self, tag: char) -> SlotValidator {
        self.entries
            .get(&tag)
            .copied()
            .unwrap_or(SlotValidator::Never)
    }

    /// Test `input` against the validator for `tag`.
    #[must_use]
    pub fn validate(&self, tag: char, input: char) -> bool {
        self.lookup(tag).accepts(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_digit_accepts_exactly_ascii_digits() {
        let table = ValidatorTable::digits();
        for c in '0'..='9' {
            assert!(table.validate('9', c), "'9' should accept {c}");
        }
        assert!(!table.validate('9', 'a'));
        assert!(!table.validate('9', ' '));
        assert!(!table.validate('9', '_'));
        // Non-ASCII digits are out of scope for the digit classes.
        assert!(!table.validate('9', '٣'));
    }

    #[test]
    fn bounded_tags_accept_up_to_their_value() {
        let table = ValidatorTable::digits();
        assert!(table.validate('3', '0'));
        assert!(table.validate('3', '3'));
        assert!(!table.validate('3', '4'));
        assert!(!table.validate('3', '9'));
        assert!(table.validate('1', '1'));
        assert!(!table.validate('1', '2'));
        assert!(!table.validate('8', '9'));
    }

    #[test]
    fn unknown_tag_rejects_everything() {
        let table = ValidatorTable::digits();
        for c in ['0', '9', 'a', '_', ' '] {
            assert!(!table.validate('x', c));
        }
        assert_eq!(table.lookup('x'), SlotValidator::Never);
    }

    #[test]
    fn empty_table_rejects_everything() {
        let table = ValidatorTable::empty();
        assert!(!table.validate('9', '5'));
    }

    #[test]
    fn custom_validator_is_consulted() {
        fn hex_upper(c: char) -> bool {
            c.is_ascii_hexdigit() && !c.is_ascii_lowercase()
        }

        let mut table = ValidatorTable::digits();
        table.register('h', SlotValidator::Custom(hex_upper));
        assert!(table.validate('h', 'F'));
        assert!(table.validate('h', '0'));
        assert!(!table.validate('h', 'f'));
        assert!(!table.validate('h', 'g'));
    }

    #[test]
    fn register_overrides_existing_tag() {
        let mut table = ValidatorTable::digits();
        table.register('9', SlotValidator::Never);
        assert!(!table.validate('9', '5'));
    }
}
