use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::info;

use dvnc::analysis::AnalysisRequest;
use dvnc::banner::{BannerInfo, print_banner, print_session_summary};
use dvnc::commands::{CommandRegistry, CommandResult, SessionInfo, render_domains};
use dvnc::config::{Config, KNOWN_KEYS, Settings};
use dvnc::consts::default_db_path;
use dvnc::domain::DomainSet;
use dvnc::engine::Engine;
use dvnc::engine::synthesis::SynthesisEngine;
use dvnc::knowledge::KnowledgeConfig;
use dvnc::spinner::{ANALYZING_LABEL, Spinner};
use dvnc::stream::stream_lines;

const BUILTIN_LABEL: &str = "built-in";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "dvnc",
    version,
    about = "Da Vinci-inspired insight synthesis for engineering challenges."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Knowledge configuration file (JSON). Defaults to the built-in domains
    #[arg(short, long, global = true)]
    knowledge: Option<PathBuf>,

    /// Random seed, for reproducible insights
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// SQLite database for stored preferences (default: ~/.dvnc/dvnc.db, :memory: for none)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Pause between streamed lines, in milliseconds
    #[arg(long)]
    stream_delay_ms: Option<u64>,

    /// How long the analyzing spinner runs, in milliseconds
    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Analyze a single challenge and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,

    /// With --run: print the full analysis as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a JSON request ({"prompt": "..."}) and print the result as JSON
    Analyze {
        /// Request file, or "-" for stdin
        #[arg(long, default_value = "-")]
        request: String,
    },
    /// List domains, concepts and citations
    Domains,
    /// Manage stored preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a stored value
    Get { key: String },
    /// Store a value
    Set { key: String, value: String },
    /// Remove a stored value
    Unset { key: String },
    /// Print every stored value
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let store = open_store(cli.db.as_deref())?;

    if let Some(Command::Config { action }) = &cli.command {
        return handle_config(&store, action);
    }

    let settings = resolve_settings(&cli, Settings::load(&store)?);
    let (knowledge, knowledge_label) = load_knowledge(settings.knowledge.as_deref())?;
    let domains = Arc::new(DomainSet::from_config(&knowledge));

    let mut engine = match settings.seed {
        Some(seed) => SynthesisEngine::new(domains, seed),
        None => SynthesisEngine::unseeded(domains),
    };
    info!(seed = engine.seed(), knowledge = %knowledge_label, "session ready");

    match &cli.command {
        Some(Command::Domains) => {
            print!("{}", render_domains(engine.domains()));
            return Ok(());
        }
        Some(Command::Analyze { request }) => {
            return handle_request(&mut engine, request).await;
        }
        _ => {}
    }

    // Single challenge mode
    if let Some(task) = &cli.run {
        if cli.json {
            let analysis = engine.analyze(task);
            println!("{}", serde_json::to_string_pretty(analysis)?);
        } else {
            present(&mut engine, task, &settings).await?;
        }
        return Ok(());
    }

    let domain_names: Vec<&str> = engine.domains().iter().map(|m| m.domain()).collect();
    print_banner(&BannerInfo {
        domains: &domain_names,
        originator: knowledge.originator(),
        knowledge: &knowledge_label,
        seed: engine.seed(),
    });

    let registry = CommandRegistry::new();
    let mut analyses = 0;

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\ndvnc> ");
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
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let task = line.trim();
        if task.is_empty() {
            continue;
        }

        let info = SessionInfo {
            seed: engine.seed(),
            domains: engine.domains(),
            knowledge: &knowledge_label,
            last_analysis: engine.last_analysis(),
        };
        match registry.dispatch(task, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        // Ctrl+C while streaming stops the answer, not the session
        tokio::select! {
            result = present(&mut engine, task, &settings) => {
                match result {
                    Ok(()) => analyses += 1,
                    Err(e) => eprintln!("\nerror: {}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\n\ninterrupted");
            }
        }
    }

    print_session_summary(analyses);
    Ok(())
}

/// Initialize tracing. `RUST_LOG` wins over the `-v` count.
fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "dvnc=warn",
        1 => "dvnc=info",
        2 => "dvnc=debug",
        _ => "dvnc=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}

fn open_store(db: Option<&str>) -> Result<Config> {
    let path = match db {
        Some(path) => path.to_string(),
        None => {
            let path = default_db_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };
    Config::open(&path)
}

/// Command-line flags override stored values.
fn resolve_settings(cli: &Cli, stored: Settings) -> Settings {
    Settings {
        seed: cli.seed.or(stored.seed),
        knowledge: cli.knowledge.clone().or(stored.knowledge),
        stream_delay: cli
            .stream_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(stored.stream_delay),
        think_delay: cli
            .think_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(stored.think_delay),
    }
}

fn load_knowledge(path: Option<&Path>) -> Result<(KnowledgeConfig, String)> {
    match path {
        Some(path) => {
            let config = KnowledgeConfig::from_json_file(path)
                .with_context(|| format!("cannot load knowledge from {}", path.display()))?;
            Ok((config, path.display().to_string()))
        }
        None => Ok((KnowledgeConfig::builtin(), BUILTIN_LABEL.to_string())),
    }
}

/// Spinner, side panel of detected concepts, then the streamed synthesis.
async fn present(engine: &mut SynthesisEngine, task: &str, settings: &Settings) -> Result<()> {
    Spinner::hold(ANALYZING_LABEL, settings.think_delay).await;
    let synthesis = engine.run(task).await?;

    if let Some(analysis) = engine.last_analysis() {
        println!("Detected concepts:\n{}\n", analysis.keyword_summary());
    }

    let mut stdout = tokio::io::stdout();
    stream_lines(&synthesis, settings.stream_delay, &mut stdout).await?;
    Ok(())
}

async fn handle_request(engine: &mut SynthesisEngine, source: &str) -> Result<()> {
    let json = if source == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };

    let prompt = AnalysisRequest::from_json_str(&json)?.into_prompt()?;
    let analysis = engine.analyze(&prompt);
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

fn handle_config(store: &Config, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Get { key } => match store.get(key)? {
            Some(value) => println!("{value}"),
            None => println!("{key} is not set"),
        },
        ConfigAction::Set { key, value } => {
            store.set(key, value)?;
            println!("✓ {key} = {value}");
        }
        ConfigAction::Unset { key } => {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                anyhow::bail!("unknown config key: {key}");
            }
            store.remove(key)?;
            println!("✓ {key} unset");
        }
        ConfigAction::List => {
            for (key, value) in store.entries()? {
                println!("{key} = {value}");
            }
        }
    }
    Ok(())
}
