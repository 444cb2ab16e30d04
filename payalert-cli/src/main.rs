use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use payalert_core::time::local_date;
use payalert_core::{LedgerStore, TEST_ANNOUNCEMENT, Transaction, announcement};
use payalert_ingest::MessageParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod view;

use config::Config;

const NOT_A_CREDIT: &str =
    "Could not detect a credit transaction. Please check the message format.";

#[derive(Parser, Debug)]
#[command(name = "payalert", version, about = "Parse bank/UPI credit alerts and keep a ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a message and print the extracted fields as JSON (nothing is recorded)
    Parse {
        /// The SMS/notification text
        message: String,
    },

    /// Parse a message and record it in the ledger
    Add {
        /// The SMS/notification text
        message: String,
    },

    /// Show the most recent credits, newest first
    List {
        /// Number of rows (default: [alerts] recent_limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Total credited today in the configured timezone
    Today,

    /// Print the voice test phrase
    TestVoice,

    /// Manage ~/.payalert/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

impl Command {
    /// Whether this subcommand reads config.toml. The rest run on defaults,
    /// so a broken config file cannot stop them.
    fn needs_config(&self) -> bool {
        !matches!(
            self,
            Command::TestVoice
                | Command::Config {
                    command: ConfigCommand::Init
                }
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = if cli.command.needs_config() {
        config::load_config()?
    } else {
        Config::default()
    };
    init_tracing(&cfg.logging.level);

    match cli.command {
        Command::Parse { message } => {
            let parser = MessageParser::with_timezone(cfg.timezone()?)?;
            let Some(parsed) = parser.parse(&message) else {
                bail!(NOT_A_CREDIT);
            };
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }

        Command::Add { message } => add(&cfg, &message)?,

        Command::List { limit } => {
            let tz = cfg.timezone()?;
            let ledger = LedgerStore::new(state::ledger_path()?).load()?;
            let recent = ledger.recent(limit.unwrap_or(cfg.alerts.recent_limit));
            if recent.is_empty() {
                println!("No transactions yet. Add one with: payalert add \"<message>\"");
            }
            for tx in recent {
                println!("{}", view::transaction_line(tx, tz));
            }
        }

        Command::Today => {
            let tz = cfg.timezone()?;
            let ledger = LedgerStore::new(state::ledger_path()?).load()?;
            let today = local_date(Utc::now(), tz);
            let total = ledger.total_for_day(today, tz);
            let count = ledger.count_for_day(today, tz);
            println!("{}", view::today_line(total, count));
        }

        Command::TestVoice => println!("{TEST_ANNOUNCEMENT}"),

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                println!("# {}\n{}", config::config_path()?.display(), s);
            }
        },
    }

    Ok(())
}

fn add(cfg: &Config, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Please enter a transaction message");
    }

    let parser = MessageParser::with_timezone(cfg.timezone()?)?;
    let Some(parsed) = parser.parse(message) else {
        bail!(NOT_A_CREDIT);
    };

    let tx = Transaction::from_parsed(parsed, message, Utc::now());
    let store = LedgerStore::new(state::ledger_path()?);
    let mut ledger = store.load()?;
    ledger.record(tx.clone());
    store
        .save(&ledger)
        .with_context(|| format!("saving {}", store.path().display()))?;
    info!(id = %tx.id, amount = tx.amount, source = %tx.source, "recorded credit");

    println!("Recorded {}", view::transaction_line(&tx, cfg.timezone()?));
    if cfg.alerts.voice_enabled {
        println!("{}", announcement(tx.amount));
    }
    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
