// Interactive session: one event handler per trigger, errors shown inline
use crate::application::session::{on_translate, on_voice_capture, speak_translation, Session};
use crate::domain::model::{selection_label, LanguageTag, UnknownLanguage};
use crate::presentation::render::{
    format_languages, format_translation, prompt, status_line, Status, LISTENING,
    TRANSLATION_SUCCESSFUL,
};
use crate::presentation::theme::Theme;
use crate::state::AppState;
use std::io::Write;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

pub const HELP: &str = "\
Type text and press Enter to translate it.

  :source <lang>   select the source language (- to clear)
  :target <lang>   select the target language (- to clear)
  :swap            swap source and target
  :listen          capture text from the microphone
  :translate       translate the current text again
  :speak on|off    read translations aloud
  :langs           list supported languages
  :help            show this help
  :quit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Source(Option<LanguageTag>),
    Target(Option<LanguageTag>),
    Swap,
    Listen,
    Translate,
    Speak(bool),
    Languages,
    Help,
    Quit,
    /// Replace the text buffer and translate it
    Text(String),
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: :{0} (try :help)")]
    Unknown(String),

    #[error("{0}")]
    Language(#[from] UnknownLanguage),

    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("Expected on or off, got: {0}")]
    Toggle(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(Command::Text(line.trim_end_matches(['\r', '\n']).to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "source" | "s" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("source"));
            }
            Ok(Command::Source(LanguageTag::parse_selection(arg)?))
        }
        "target" | "t" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("target"));
            }
            Ok(Command::Target(LanguageTag::parse_selection(arg)?))
        }
        "swap" => Ok(Command::Swap),
        "listen" | "l" => Ok(Command::Listen),
        "translate" | "tr" => Ok(Command::Translate),
        "speak" => match arg.to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" => Ok(Command::Speak(true)),
            "off" | "false" | "no" => Ok(Command::Speak(false)),
            "" => Err(CommandError::MissingArgument("speak")),
            other => Err(CommandError::Toggle(other.to_string())),
        },
        "langs" | "languages" => Ok(Command::Languages),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn status(state: &AppState, theme: &Theme, kind: Status, message: &str) {
    eprintln!(
        "{}",
        status_line(kind, message, theme, state.config.enable_emoji)
    );
}

/// Voice-capture trigger with user feedback. Returns true on success.
pub async fn run_listen(state: &AppState, session: &mut Session, theme: &Theme) -> bool {
    status(state, theme, Status::Info, LISTENING);
    match on_voice_capture(state, session).await {
        Ok(text) => {
            status(state, theme, Status::Success, &format!("Heard: {}", text));
            true
        }
        Err(e) => {
            status(state, theme, Status::Error, &e.to_string());
            false
        }
    }
}

/// Translate trigger: validate, translate, display, then speak.
/// Returns true when a translation was shown.
pub async fn run_translate(state: &AppState, session: &Session, theme: &Theme, json: bool) -> bool {
    let outcome = match on_translate(state, session).await {
        Ok(outcome) => outcome,
        Err(e) => {
            status(state, theme, Status::Error, &e.to_string());
            return false;
        }
    };

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                status(state, theme, Status::Error, &e.to_string());
                return false;
            }
        }
    } else {
        status(state, theme, Status::Success, TRANSLATION_SUCCESSFUL);
        print!("{}", format_translation(&outcome, theme));
        std::io::stdout().flush().ok();
    }

    if session.speak {
        if let Err(e) = speak_translation(state, &outcome).await {
            status(state, theme, Status::Error, &e.to_string());
        }
    }
    true
}

/// How a one-shot run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    Done,
    Failed,
    Interrupted,
}

impl OneShot {
    pub fn exit_code(self) -> i32 {
        match self {
            OneShot::Done => 0,
            OneShot::Failed => 1,
            OneShot::Interrupted => 130,
        }
    }
}

/// Listen (optionally), translate and speak once. Ctrl-C drops whatever
/// step is running; child processes are killed with it.
pub async fn run_one_shot(
    state: &AppState,
    mut session: Session,
    theme: &Theme,
    listen: bool,
    json: bool,
    shutdown: oneshot::Receiver<()>,
) -> OneShot {
    let steps = async {
        if listen && !run_listen(state, &mut session, theme).await {
            return OneShot::Failed;
        }
        if run_translate(state, &session, theme, json).await {
            OneShot::Done
        } else {
            OneShot::Failed
        }
    };

    tokio::select! {
        outcome = steps => outcome,
        _ = shutdown => {
            eprintln!();
            OneShot::Interrupted
        }
    }
}

/// Read stdin lines on a plain thread. A blocking read there never holds up
/// runtime shutdown.
pub fn spawn_line_reader() -> mpsc::Receiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

pub async fn run_session(
    state: &AppState,
    mut session: Session,
    theme: &Theme,
    mut lines: mpsc::Receiver<std::io::Result<String>>,
    mut shutdown: oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    println!("{}", (theme.title)("Language Translation App"));
    println!("Translate text between multiple languages and listen to translations.");
    println!("Type :help for commands.\n");

    loop {
        print!("{}", prompt(session.source, session.target, theme));
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.recv() => line.transpose()?,
            _ = &mut shutdown => {
                println!();
                break;
            }
        };
        let Some(line) = line else {
            println!();
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                status(state, theme, Status::Error, &e.to_string());
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        match command {
            Command::Empty => {}
            Command::Source(selection) => {
                session.source = selection;
                println!("{} {}", (theme.label)("Source:"), (theme.lang)(selection_label(selection)));
            }
            Command::Target(selection) => {
                session.target = selection;
                println!("{} {}", (theme.label)("Target:"), (theme.lang)(selection_label(selection)));
            }
            Command::Swap => session.swap(),
            Command::Listen => {
                run_listen(state, &mut session, theme).await;
            }
            Command::Translate => {
                run_translate(state, &session, theme, false).await;
            }
            Command::Text(text) => {
                session.text = text;
                run_translate(state, &session, theme, false).await;
            }
            Command::Speak(on) => {
                session.speak = on;
                println!(
                    "{} {}",
                    (theme.label)("Read aloud:"),
                    if on { "on" } else { "off" }
                );
            }
            Command::Languages => print!("{}", format_languages(theme)),
            Command::Help => print!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
