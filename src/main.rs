// Main entry point
use clap::Parser;
use colored::Colorize;
use voxlate::application::session::Session;
use voxlate::domain::model::LanguageTag;
use voxlate::infrastructure::config::{self, load_config, Config};
use voxlate::interfaces::cli::Cli;
use voxlate::interfaces::repl::{run_one_shot, run_session, spawn_line_reader, OneShot};
use voxlate::presentation::render::format_languages;
use voxlate::presentation::theme::Theme;
use voxlate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
            // keep the sender so nothing reads the failure as a shutdown
            std::future::pending::<()>().await;
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.languages {
        print!("{}", format_languages(&theme));
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    let source = resolve_language(cli.source.as_deref(), config.default_source)?;
    let target = resolve_language(cli.target.as_deref(), config.default_target)?;
    let speak = config.speak_result && !cli.quiet;

    // Backends are built once and live for the whole process
    let state = AppState::new(config)?;
    let mut session = Session::new(source, target, speak);

    if cli.wants_session() {
        return run_session(&state, session, &theme, spawn_line_reader(), shutdown_rx).await;
    }

    if !cli.listen {
        session.text = cli.text.join(" ");
    }

    let outcome = run_one_shot(&state, session, &theme, cli.listen, cli.json, shutdown_rx).await;
    if outcome != OneShot::Done {
        std::process::exit(outcome.exit_code());
    }

    Ok(())
}

/// Command-line value wins over the configured default
fn resolve_language(
    arg: Option<&str>,
    default: Option<LanguageTag>,
) -> anyhow::Result<Option<LanguageTag>> {
    match arg {
        Some(value) => Ok(LanguageTag::parse_selection(value)?),
        None => Ok(default),
    }
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = config::log_directive(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // stderr keeps stdout clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_status(config: &Config) {
    println!("{}", "vox Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!(
        "Translation: {:?} at {}",
        config.translation.provider, config.translation.endpoint
    );
    println!(
        "Speech recognition: {} (recorder: {})",
        config.speech_recognition.endpoint, config.speech_recognition.recorder_command
    );
    println!(
        "Speech output: {}{}",
        config.speech_output.command,
        if config.speak_result { "" } else { " (disabled)" }
    );
    println!(
        "Default languages: {} → {}",
        voxlate::domain::model::selection_label(config.default_source),
        voxlate::domain::model::selection_label(config.default_target)
    );
}
