//! Output formatting tests

use chrono::Utc;
use voxlate::domain::model::{LanguageTag, TranslationOutcome};
use voxlate::presentation::render::{
    format_languages, format_translation, prompt, status_line, Status, TRANSLATION_SUCCESSFUL,
};
use voxlate::presentation::theme::Theme;

fn plain_theme() -> Theme {
    colored::control::set_override(false);
    Theme::from_name("temp")
}

fn outcome(translation: &str) -> TranslationOutcome {
    TranslationOutcome {
        text: "Hello".to_string(),
        source: LanguageTag::English,
        target: LanguageTag::French,
        translation: translation.to_string(),
        translated_at: Utc::now(),
    }
}

#[test]
fn test_translation_box() {
    let theme = plain_theme();
    let output = format_translation(&outcome("Bonjour"), &theme);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Translated Text: English → French");
    assert_eq!(lines[1], "┌─────────┐");
    assert_eq!(lines[2], "│ Bonjour │");
    assert_eq!(lines[3], "└─────────┘");
}

#[test]
fn test_multiline_box_is_padded() {
    let theme = plain_theme();
    let output = format_translation(&outcome("Ça va\nmerci beaucoup"), &theme);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[2], "│ Ça va          │");
    assert_eq!(lines[3], "│ merci beaucoup │");
}

#[test]
fn test_devanagari_box_keeps_border_aligned() {
    use unicode_width::UnicodeWidthStr;

    let theme = plain_theme();
    // virama and vowel signs take no column of their own
    let output = format_translation(&outcome("नमस्ते\nधन्यवाद"), &theme);
    let lines: Vec<&str> = output.lines().skip(1).collect();

    let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    assert!(lines[1].ends_with(" │"));
}

#[test]
fn test_status_emoji_toggle() {
    let theme = plain_theme();
    assert_eq!(
        status_line(Status::Success, TRANSLATION_SUCCESSFUL, &theme, true),
        "✅ Translation Successful!"
    );
    assert_eq!(
        status_line(Status::Error, "boom", &theme, false),
        "[error] boom"
    );
}

#[test]
fn test_language_list_and_prompt() {
    let theme = plain_theme();
    let list = format_languages(&theme);
    assert!(list.contains("mr_IN"));
    assert!(list.contains("Marathi"));

    assert_eq!(
        prompt(Some(LanguageTag::German), None, &theme),
        "[German → Select Language] > "
    );
}
