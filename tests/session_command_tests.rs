//! Interactive session command tests

use voxlate::domain::model::LanguageTag;
use voxlate::interfaces::repl::{parse_command, Command, CommandError};

#[test]
fn test_plain_text_is_translated() {
    assert_eq!(
        parse_command("Hello there"),
        Ok(Command::Text("Hello there".to_string()))
    );
    assert_eq!(parse_command("   "), Ok(Command::Empty));
}

#[test]
fn test_language_commands() {
    assert_eq!(
        parse_command(":source fr_XX"),
        Ok(Command::Source(Some(LanguageTag::French)))
    );
    assert_eq!(
        parse_command(":t spanish"),
        Ok(Command::Target(Some(LanguageTag::Spanish)))
    );
    assert_eq!(parse_command(":target -"), Ok(Command::Target(None)));
    assert_eq!(
        parse_command(":source"),
        Err(CommandError::MissingArgument("source"))
    );
    assert!(matches!(
        parse_command(":source klingon"),
        Err(CommandError::Language(_))
    ));
}

#[test]
fn test_triggers() {
    assert_eq!(parse_command(":listen"), Ok(Command::Listen));
    assert_eq!(parse_command(":translate"), Ok(Command::Translate));
    assert_eq!(parse_command(":swap"), Ok(Command::Swap));
    assert_eq!(parse_command(":quit"), Ok(Command::Quit));
}

#[test]
fn test_speak_toggle() {
    assert_eq!(parse_command(":speak off"), Ok(Command::Speak(false)));
    assert_eq!(parse_command(":speak ON"), Ok(Command::Speak(true)));
    assert_eq!(
        parse_command(":speak maybe"),
        Err(CommandError::Toggle("maybe".to_string()))
    );
}

#[test]
fn test_unknown_command() {
    assert_eq!(
        parse_command(":frobnicate"),
        Err(CommandError::Unknown("frobnicate".to_string()))
    );
}
