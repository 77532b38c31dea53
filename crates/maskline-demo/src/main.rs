#![forbid(unsafe_code)]

//! Inline masked-prompt demo.
//!
//! Runs a three-field form (phone, date, 24-hour time) and prints the
//! submitted values. Set `MASKLINE_LOG` (e.g. `MASKLINE_LOG=debug`) to see
//! the engine's tracing output on stderr.

use std::io;

use maskline::{MaskForm, prompt};

fn main() -> io::Result<()> {
    init_tracing();

    let mut form = MaskForm::new()
        .with_field("Phone", "(999) 999-9999")
        .with_field("Date", "99/99/9999")
        .with_field("Time", "29:99");

    match prompt::run(&mut form)? {
        Some(_) => {
            for (label, field) in form.entries() {
                println!("{label}: {}", field.text());
            }
            if !form.is_complete() {
                println!("(some slots left unfilled)");
            }
        }
        None => println!("cancelled"),
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("MASKLINE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
