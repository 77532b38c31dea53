#![forbid(unsafe_code)]

//! Focus-managed field groups.
//!
//! [`MaskForm`] plays the host role for one or more [`MaskField`]s: it routes
//! events to the focused field and supplies the "default actions" the fields
//! themselves never perform. A tab that a field passes through becomes focus
//! traversal; enter and escape resolve the whole form. The form holds no
//! terminal state, so it can be driven entirely by synthetic events in tests.

use maskline_core::event::{Event, KeyCode, KeyEventKind};

use crate::field::{KeyDisposition, MaskField};

/// Outcome of feeding one event to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Keep reading events.
    Continue,

    /// Enter was pressed: the host should accept the current values.
    Submit,

    /// Escape (or Ctrl+C) was pressed: the host should discard the form.
    Cancel,
}

#[derive(Debug, Clone)]
struct Entry {
    label: String,
    field: MaskField,
}

/// An ordered list of labeled masked fields with one focused member.
#[derive(Debug, Clone, Default)]
pub struct MaskForm {
    entries: Vec<Entry>,
    focus: usize,
}

impl MaskForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field with the stock digit validators (builder).
    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, template: &str) -> Self {
        self.push(label, MaskField::new(template));
        self
    }

    /// Append a pre-built field.
    pub fn push(&mut self, label: impl Into<String>, field: MaskField) {
        self.entries.push(Entry {
            label: label.into(),
            field,
        });
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the focused field.
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The focused field, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&MaskField> {
        self.entries.get(self.focus).map(|e| &e.field)
    }

    /// Iterate `(label, field)` pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MaskField)> {
        self.entries.iter().map(|e| (e.label.as_str(), &e.field))
    }

    /// The current text of every field, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.field.text()).collect()
    }

    /// Whether every field is completely filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.field.is_complete())
    }

    /// Handle a terminal event.
    ///
    /// Enter and escape resolve the form before any field sees them; all
    /// other events go to the focused field, and a passed-through tab or
    /// back-tab becomes focus traversal.
    pub fn handle_event(&mut self, event: &Event) -> FormOutcome {
        if let Event::Key(key) = event
            && (key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat)
        {
            match key.code {
                KeyCode::Enter => return FormOutcome::Submit,
                KeyCode::Escape => return FormOutcome::Cancel,
                KeyCode::Char('c') if key.ctrl() => return FormOutcome::Cancel,
                _ => {}
            }
        }

        let Some(entry) = self.entries.get_mut(self.focus) else {
            return FormOutcome::Continue;
        };

        if entry.field.handle_event(event) == KeyDisposition::PassThrough
            && let Event::Key(key) = event
            && (key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat)
        {
            match key.code {
                KeyCode::Tab => self.focus_next(),
                KeyCode::BackTab => self.focus_prev(),
                _ => {}
            }
        }
        FormOutcome::Continue
    }

    fn focus_next(&mut self) {
        if !self.entries.is_empty() {
            self.focus = (self.focus + 1) % self.entries.len();
        }
    }

    fn focus_prev(&mut self) {
        if !self.entries.is_empty() {
            self.focus = (self.focus + self.entries.len() - 1) % self.entries.len();
        }
    }
}
