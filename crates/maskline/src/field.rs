#![forbid(unsafe_code)]

//! The masked-input state machine.
//!
//! [`MaskField`] exclusively owns one display buffer plus caret and is the
//! only way to mutate them. Each keystroke is handled to completion: the
//! field decides the buffer mutation (if any) and the next caret position,
//! upholding two invariants at all times:
//!
//! - **Literal invariance**: a literal position always shows its mask
//!   character.
//! - **Length invariance**: the buffer has exactly the mask's length.
//!
//! Editing is overwrite-style. Accepted characters replace the slot under
//! the caret and the caret skips forward past any literal run to the next
//! slot; backspace clears the previous slot; delete clears the slot under
//! the caret in place. Rejected input changes nothing but is still consumed,
//! so a host never applies its default insertion behavior.

use maskline_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use unicode_width::UnicodeWidthChar;

use crate::mask::{Mask, PLACEHOLDER, is_special};
use crate::validators::ValidatorTable;

/// What a field did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The field owns this key; the host must not apply its default action,
    /// even when the key changed nothing.
    Consumed,

    /// The key is exempt from masking (the tab family) or is not a key
    /// press at all; the host's default action proceeds.
    PassThrough,
}

/// A single masked input: template, display buffer, and caret.
#[derive(Debug, Clone)]
pub struct MaskField {
    mask: Mask,
    validators: ValidatorTable,
    buffer: Vec<char>,
    caret: usize,
}

impl MaskField {
    /// Create a field over `template` with the stock digit validators.
    #[must_use]
    pub fn new(template: &str) -> Self {
        Self::with_validators(template, ValidatorTable::digits())
    }

    /// Create a field over `template` with a custom validator table.
    ///
    /// The caret starts on the first editable slot, so typing works
    /// immediately even when the template opens with literals.
    #[must_use]
    pub fn with_validators(template: &str, validators: ValidatorTable) -> Self {
        let mask = Mask::new(template);
        let buffer = mask.placeholder_buffer();
        let caret = first_slot(&buffer);
        Self {
            mask,
            validators,
            buffer,
            caret,
        }
    }

    /// The mask template.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Current caret offset, `0 <= caret <= len`.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Reposition the caret, clamping to `0..=len`. Hosts that move the
    /// caret from outside (e.g. on click) go through here; all other
    /// mutation happens via [`handle_event`](Self::handle_event).
    pub fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(self.buffer.len());
    }

    /// Visual column of the caret (unicode width of the text before it),
    /// for hardware-cursor placement.
    #[must_use]
    pub fn visual_caret_col(&self) -> usize {
        self.buffer[..self.caret]
            .iter()
            .map(|&c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    /// Whether every editable slot has been filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buffer
            .iter()
            .enumerate()
            .all(|(i, &c)| self.mask.is_literal(i) || c != PLACEHOLDER)
    }

    /// Restore the initial placeholder buffer and move the caret back to
    /// the first editable slot.
    pub fn reset(&mut self) {
        self.buffer = self.mask.placeholder_buffer();
        self.caret = first_slot(&self.buffer);
    }

    /// Handle a terminal event.
    ///
    /// Key presses and repeats run the state machine; releases, resizes,
    /// and anything else pass through untouched.
    pub fn handle_event(&mut self, event: &Event) -> KeyDisposition {
        if let Event::Key(key) = event
            && (key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat)
        {
            return self.handle_key(key);
        }
        KeyDisposition::PassThrough
    }

    fn handle_key(&mut self, key: &KeyEvent) -> KeyDisposition {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("mask_key", code = ?key.code, caret = self.caret).entered();

        match key.code {
            // The sole exemption: tab traversal belongs to the host.
            KeyCode::Tab | KeyCode::BackTab => KeyDisposition::PassThrough,
            KeyCode::Left => {
                self.caret_left();
                KeyDisposition::Consumed
            }
            KeyCode::Right => {
                self.caret_right();
                KeyDisposition::Consumed
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyDisposition::Consumed
            }
            KeyCode::Delete => {
                self.delete_at_caret();
                KeyDisposition::Consumed
            }
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                self.insert_char(c);
                KeyDisposition::Consumed
            }
            // Chords and the remaining named keys change nothing but are
            // still owned by the field.
            _ => KeyDisposition::Consumed,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let accepted = self
            .mask
            .slot_tag(self.caret)
            .is_some_and(|tag| self.validators.validate(tag, c));
        if !accepted {
            return;
        }
        self.buffer[self.caret] = c;
        self.caret_right();
    }

    fn backspace(&mut self) {
        if let Some(prev) = self.prev_slot_left(self.caret) {
            self.buffer[prev] = PLACEHOLDER;
            self.caret = prev;
        }
    }

    /// Clear the slot under the caret in place.
    ///
    /// Guarded to editable in-bounds positions: clearing a literal would
    /// break literal invariance, and clearing past the end would grow the
    /// buffer.
    fn delete_at_caret(&mut self) {
        if self.mask.slot_tag(self.caret).is_some() {
            self.buffer[self.caret] = PLACEHOLDER;
        }
    }

    // --- Caret movement ---

    fn caret_left(&mut self) {
        if let Some(prev) = self.prev_slot_left(self.caret) {
            self.caret = prev;
        }
    }

    fn caret_right(&mut self) {
        if let Some(next) = self.next_slot_right(self.caret) {
            self.caret = next;
        }
    }

    /// First non-literal position strictly right of `from`.
    fn next_slot_right(&self, from: usize) -> Option<usize> {
        self.buffer
            .iter()
            .enumerate()
            .skip(from + 1)
            .find(|&(_, &c)| !is_special(c))
            .map(|(i, _)| i)
    }

    /// Last non-literal position strictly left of `before`.
    fn prev_slot_left(&self, before: usize) -> Option<usize> {
        self.buffer[..before].iter().rposition(|&c| !is_special(c))
    }
}

/// First editable position in `buffer`, or 0 for an all-literal buffer.
fn first_slot(buffer: &[char]) -> usize {
    buffer.iter().position(|&c| !is_special(c)).unwrap_or(0)
}
