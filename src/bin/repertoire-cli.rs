#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use repertoire::session::{Clock, FixedClock, Session, SystemClock, DEFAULT_PROMPT};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Assistant de contacts interactif (en mémoire, sans fichier)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs sur stderr (feature `logging`, filtre via RUST_LOG)
    #[arg(long)]
    log: bool,

    /// Date du jour pour `birthdays` (YYYY-MM-DD), sinon la date locale
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Invite affichée avant chaque commande
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    if cli.log {
        eprintln!("logging disabled: rebuild with `--features logging`");
    }

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(clock.as_ref())
        .with_prompt(cli.prompt)
        .run(stdin.lock(), stdout.lock())
        .context("interactive session failed")?;
    Ok(())
}
