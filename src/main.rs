use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use shopdesk::banner::{BannerInfo, print_banner, print_session_summary};
use shopdesk::collaborator::Collaborator;
use shopdesk::collaborator::groq::GroqCollaborator;
use shopdesk::commands::{CommandRegistry, CommandResult, SessionInfo};
use shopdesk::config::CollaboratorConfig;
use shopdesk::consts::{DEFAULT_HISTORY_WINDOW, GREETING, OFFLINE_GREETING};
use shopdesk::engine::support::{SupportConfig, SupportEngine};
use shopdesk::engine::{Engine, Mode};
use shopdesk::session::Session;
use shopdesk::spinner::Spinner;
use shopdesk::telemetry;

#[derive(Parser)]
#[command(
    name = "shopdesk",
    version,
    about = "24/7 customer support chat for an e-commerce store."
)]
struct Cli {
    /// How unmatched questions are answered
    #[arg(short, long, value_enum, default_value_t = Mode::Hybrid)]
    mode: Mode,

    /// Groq model name (overrides GROQ_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Seed for canned-response selection (reproducible replies)
    #[arg(long)]
    seed: Option<u64>,

    /// Prior messages sent to the hosted model as context
    #[arg(long, default_value_t = DEFAULT_HISTORY_WINDOW)]
    history: usize,

    /// Read settings from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Answer a single message and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let mut config = CollaboratorConfig::load(cli.env_file.as_deref())?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let collaborator: Option<Box<dyn Collaborator>> = if cli.mode.escalates() {
        Some(Box::new(GroqCollaborator::new(config)?))
    } else {
        None
    };

    let greeting = if cli.mode.escalates() {
        GREETING
    } else {
        OFFLINE_GREETING
    };

    let engine_config = SupportConfig {
        mode: cli.mode,
        history_window: cli.history,
        seed: cli.seed,
    };
    let mut engine = SupportEngine::with_defaults(collaborator, engine_config);

    let mode = engine.mode().label();
    let (model_label, api_status) = match engine.collaborator() {
        Some(c) if c.is_configured() => (c.model().to_string(), "configured ✓"),
        Some(c) => (c.model().to_string(), "missing ✗"),
        None => ("—".to_string(), "not used"),
    };

    info!(
        mode,
        model = %model_label,
        history = cli.history,
        seeded = cli.seed.is_some(),
        "starting"
    );

    let mut session = Session::new(greeting);

    // Single message mode
    if let Some(message) = cli.run {
        let (_, reply) = engine.handle_turn(session, &message).await;
        println!("{reply}");
        return Ok(());
    }

    print_banner(&BannerInfo {
        mode,
        model: &model_label,
        api_status,
    });
    println!("bot> {greeting}");

    let commands = CommandRegistry::new();

    // Async stdin so Ctrl+C is caught at the prompt too.
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nyou> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let info = SessionInfo {
            mode,
            model: &model_label,
            api_status,
            usage: engine.session_usage(),
            transcript: session.transcript(),
        };
        let message = match commands.dispatch(input, &info).await {
            CommandResult::NotACommand => input.to_string(),
            CommandResult::Submit(phrase) => {
                println!("you> {phrase}");
                phrase
            }
            CommandResult::Handled => continue,
            CommandResult::Clear => {
                session = session.reset();
                println!("  ✓ chat history cleared");
                println!("\nbot> {greeting}");
                continue;
            }
            CommandResult::Quit => break,
        };

        let spinner = if engine.will_escalate(&message) {
            Spinner::start_if_tty("typing")
        } else {
            None
        };

        // Ctrl+C while waiting on the hosted model cancels the turn, not the chat.
        // The session moves into the turn, so keep a copy to fall back on.
        let before = session.clone();
        let outcome = tokio::select! {
            turned = engine.handle_turn(session, &message) => Some(turned),
            _ = tokio::signal::ctrl_c() => None,
        };
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        session = match outcome {
            Some((next, reply)) => {
                println!("\nbot> {reply}");
                next
            }
            None => {
                println!("\n\ninterrupted");
                before
            }
        };
    }

    print_session_summary(&session, engine.session_usage());
    Ok(())
}
