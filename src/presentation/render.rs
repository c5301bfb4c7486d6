use crate::domain::model::{selection_label, LanguageTag, TranslationOutcome};
use crate::presentation::theme::Theme;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const TRANSLATION_SUCCESSFUL: &str = "Translation Successful!";
pub const LISTENING: &str = "Listening... Please speak.";

/// Kind of a one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Info,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Success => "✅",
            Status::Error => "❌",
            Status::Info => "🎙️",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Success => "[ok]",
            Status::Error => "[error]",
            Status::Info => "[info]",
        }
    }
}

pub fn status_line(status: Status, message: &str, theme: &Theme, enable_emoji: bool) -> String {
    let prefix = if enable_emoji {
        status.emoji()
    } else {
        status.plain()
    };
    let body = match status {
        Status::Success => (theme.success)(message),
        Status::Error => (theme.error)(message),
        Status::Info => (theme.info)(message),
    };
    format!("{} {}", prefix, body)
}

/// Boxed "Translated Text" block
pub fn format_translation(outcome: &TranslationOutcome, theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{} {}",
        (theme.title)("Translated Text:"),
        (theme.lang)(&format!("{} → {}", outcome.source, outcome.target))
    )
    .ok();

    let lines: Vec<&str> = outcome.translation.lines().collect();
    let width = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(1);
    let border = "─".repeat(width + 2);

    writeln!(output, "{}", (theme.line)(&format!("┌{}┐", border))).ok();
    for line in lines {
        let pad = " ".repeat(width - line.width());
        writeln!(
            output,
            "{} {}{} {}",
            (theme.line)("│"),
            (theme.result)(line),
            pad,
            (theme.line)("│")
        )
        .ok();
    }
    writeln!(output, "{}", (theme.line)(&format!("└{}┘", border))).ok();

    output
}

pub fn format_languages(theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output, "{}", (theme.title)("Supported languages")).ok();
    for tag in LanguageTag::ALL {
        writeln!(
            output,
            "  {:<8} {:<3} {}",
            (theme.code)(tag.code()),
            tag.iso_code(),
            (theme.lang)(tag.name())
        )
        .ok();
    }
    output
}

/// Prompt showing the current language selections
pub fn prompt(source: Option<LanguageTag>, target: Option<LanguageTag>, theme: &Theme) -> String {
    format!(
        "[{} → {}] > ",
        (theme.lang)(selection_label(source)),
        (theme.lang)(selection_label(target))
    )
}
