#![forbid(unsafe_code)]

//! Inline terminal front end for a [`MaskForm`].
//!
//! Renders one `label: value` line per field in the normal screen buffer
//! (no alternate screen, scrollback preserved), keeps the hardware cursor
//! on the focused field's caret, and redraws after every event. The prompt
//! owns no editing logic; it only moves bytes between the terminal and the
//! form.

use std::io::{self, Write};

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use maskline_core::session::RawSession;
use unicode_width::UnicodeWidthStr;

use crate::form::{FormOutcome, MaskForm};

/// Separator between a field's label and its value.
const LABEL_SEP: &str = ": ";

/// Run an interactive prompt over `form` until it resolves.
///
/// Returns the field texts on submit, `None` on cancel. The terminal is
/// restored on every exit path, including panics inside event handling.
///
/// # Errors
///
/// Returns an error if raw mode cannot be entered or terminal I/O fails.
pub fn run(form: &mut MaskForm) -> io::Result<Option<Vec<String>>> {
    let session = RawSession::new()?;
    let mut stdout = io::stdout();

    let mut cursor_row = redraw(&mut stdout, form, None)?;

    loop {
        let Some(event) = session.read_event()? else {
            continue;
        };
        let outcome = form.handle_event(&event);
        #[cfg(feature = "tracing")]
        tracing::debug!(?event, ?outcome, focus = form.focus(), "prompt event");
        match outcome {
            FormOutcome::Continue => {
                cursor_row = redraw(&mut stdout, form, Some(cursor_row))?;
            }
            FormOutcome::Submit => {
                park_below(&mut stdout, form, cursor_row)?;
                return Ok(Some(form.texts()));
            }
            FormOutcome::Cancel => {
                park_below(&mut stdout, form, cursor_row)?;
                return Ok(None);
            }
        }
    }
}

/// Repaint every field line and place the cursor on the focused caret.
///
/// `cursor_row` is the form-relative row the cursor currently sits on from
/// the previous paint (`None` on the first paint, when the cursor is still
/// below any prior shell output). Returns the new cursor row.
fn redraw(out: &mut impl Write, form: &MaskForm, cursor_row: Option<usize>) -> io::Result<usize> {
    queue!(out, cursor::Hide, cursor::MoveToColumn(0))?;
    if let Some(row) = cursor_row
        && row > 0
    {
        queue!(out, cursor::MoveUp(row as u16))?;
    }

    for (label, field) in form.entries() {
        queue!(out, Clear(ClearType::CurrentLine))?;
        write!(out, "{label}{LABEL_SEP}{}\r\n", field.text())?;
    }

    let focus_row = form.focus().min(form.len());
    let rows_up = form.len() - focus_row;
    if rows_up > 0 {
        queue!(out, cursor::MoveUp(rows_up as u16))?;
    }
    let col = form
        .entries()
        .nth(focus_row)
        .map(|(label, field)| label.width() + LABEL_SEP.len() + field.visual_caret_col())
        .unwrap_or(0);
    queue!(out, cursor::MoveToColumn(col as u16), cursor::Show)?;
    out.flush()?;
    Ok(focus_row)
}

/// Move the cursor to the blank line below the form before returning to
/// cooked mode, so the shell prompt does not overwrite the rendered fields.
fn park_below(out: &mut impl Write, form: &MaskForm, cursor_row: usize) -> io::Result<()> {
    let rows_down = form.len() - cursor_row.min(form.len());
    if rows_down > 0 {
        queue!(out, cursor::MoveDown(rows_down as u16))?;
    }
    queue!(out, cursor::MoveToColumn(0))?;
    out.flush()
}
