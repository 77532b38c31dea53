#![forbid(unsafe_code)]

//! End-to-end keystroke flows: canonical events driven through fields and
//! forms exactly as the prompt front end would deliver them.

use maskline::{FormOutcome, KeyDisposition, MaskField, MaskForm, SlotValidator, ValidatorTable};
use maskline_core::event::{Event, KeyCode, KeyEvent, Modifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

fn type_str(field: &mut MaskField, s: &str) {
    for c in s.chars() {
        field.handle_event(&press(KeyCode::Char(c)));
    }
}

#[test]
fn phone_entry_with_corrections() {
    let mut field = MaskField::new("(999) 999-9999");

    // Sloppy typing: letters are rejected without moving the caret.
    type_str(&mut field, "5a5b5");
    assert_eq!(field.text(), "(555) ___-____");

    type_str(&mut field, "0124456");
    assert_eq!(field.text(), "(555) 012-4456");

    // Walk back to the first digit of the last group and fix it.
    for _ in 0..3 {
        field.handle_event(&press(KeyCode::Left));
    }
    field.handle_event(&press(KeyCode::Delete));
    assert_eq!(field.text(), "(555) 012-_456");
    type_str(&mut field, "3");
    assert_eq!(field.text(), "(555) 012-3456");
    assert!(field.is_complete());
}

#[test]
fn backspace_walks_back_across_separators() {
    let mut field = MaskField::new("99/99/9999");
    type_str(&mut field, "12311999");
    assert_eq!(field.text(), "12/31/1999");

    // The caret rests on the last slot: delete clears it in place, then
    // each backspace clears the slot before the caret and lands on it.
    field.handle_event(&press(KeyCode::Delete));
    assert_eq!(field.text(), "12/31/199_");
    for _ in 0..3 {
        field.handle_event(&press(KeyCode::Backspace));
    }
    assert_eq!(field.text(), "12/31/____");
    // One more hops over the separator into the day group.
    field.handle_event(&press(KeyCode::Backspace));
    assert_eq!(field.text(), "12/3_/____");
    assert_eq!(field.caret(), 4);
}

#[test]
fn form_traversal_and_submit() {
    let mut form = MaskForm::new()
        .with_field("Date", "99/99/9999")
        .with_field("Time", "29:99");

    for c in "12312025".chars() {
        form.handle_event(&press(KeyCode::Char(c)));
    }
    form.handle_event(&press(KeyCode::Tab));
    for c in "0930".chars() {
        form.handle_event(&press(KeyCode::Char(c)));
    }

    assert!(form.is_complete());
    assert_eq!(form.handle_event(&press(KeyCode::Enter)), FormOutcome::Submit);
    assert_eq!(
        form.texts(),
        vec!["12/31/2025".to_string(), "09:30".to_string()]
    );
}

#[test]
fn escape_cancels_mid_entry() {
    let mut form = MaskForm::new().with_field("Time", "29:99");
    form.handle_event(&press(KeyCode::Char('1')));
    assert_eq!(form.handle_event(&press(KeyCode::Escape)), FormOutcome::Cancel);
    // State is preserved; the host decides what to do with a cancelled form.
    assert_eq!(form.texts(), vec!["1_:__".to_string()]);
}

#[test]
fn custom_validator_table_flows_through_a_field() {
    fn upper_hex(c: char) -> bool {
        c.is_ascii_digit() || ('A'..='F').contains(&c)
    }

    let mut table = ValidatorTable::empty();
    table.register('h', SlotValidator::Custom(upper_hex));
    let mut field = MaskField::with_validators("hh:hh", table);

    type_str(&mut field, "fF0a9");
    assert_eq!(field.text(), "F0:9_");
    type_str(&mut field, "C");
    assert_eq!(field.text(), "F0:9C");
    assert!(field.is_complete());
}

#[test]
fn crossterm_events_drive_the_field() {
    use crossterm::event as cte;

    let mut field = MaskField::new("99");
    for ct in [
        cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('4'),
            cte::KeyModifiers::NONE,
        )),
        cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Char('2'),
            cte::KeyModifiers::NONE,
        )),
        cte::Event::Key(cte::KeyEvent::new(
            cte::KeyCode::Backspace,
            cte::KeyModifiers::NONE,
        )),
    ] {
        if let Some(event) = Event::from_crossterm(ct) {
            field.handle_event(&event);
        }
    }
    // '4' fills slot 0, '2' fills slot 1 (caret stays on the last slot),
    // backspace then clears the slot *before* the caret.
    assert_eq!(field.text(), "_2");
    assert_eq!(field.caret(), 0);
}

#[test]
fn disposition_contract_for_every_key_class() {
    let mut field = MaskField::new("99-99");
    let cases = [
        (press(KeyCode::Char('1')), KeyDisposition::Consumed),
        (press(KeyCode::Char('x')), KeyDisposition::Consumed),
        (press(KeyCode::Backspace), KeyDisposition::Consumed),
        (press(KeyCode::Delete), KeyDisposition::Consumed),
        (press(KeyCode::Left), KeyDisposition::Consumed),
        (press(KeyCode::Right), KeyDisposition::Consumed),
        (press(KeyCode::Enter), KeyDisposition::Consumed),
        (press(KeyCode::Tab), KeyDisposition::PassThrough),
        (press(KeyCode::BackTab), KeyDisposition::PassThrough),
    ];
    for (event, expected) in cases {
        assert_eq!(field.handle_event(&event), expected, "{event:?}");
    }

    let chord = Event::Key(KeyEvent::new(KeyCode::Char('v')).with_modifiers(Modifiers::CTRL));
    assert_eq!(field.handle_event(&chord), KeyDisposition::Consumed);
}
