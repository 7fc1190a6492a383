//! Terminal countdown display for work-shift rest and home times.
//!
//! A thin driver around `shift-engine`: it owns the config file, samples the
//! system clock, and re-renders once per second. All countdown logic lives
//! in the engine and is driven with explicit `now` anchors.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use shift_engine::{evaluate, ClockState, ClockStatus, ScheduleKind, ShiftConfig};

/// Interval between re-evaluations in watch mode.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "shift-clock", version, about = "Countdown to rest and home times")]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print both countdowns once and exit.
    Status {
        /// Emit the snapshots as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Re-evaluate and redraw once per second.
    Watch {
        /// Stop after this many ticks (runs until interrupted by default).
        #[arg(long)]
        count: Option<u64>,
    },
    /// Show or edit the configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as JSON.
    Show,
    /// Set a schedule time, e.g. `config set home 17:30`.
    Set {
        schedule: ScheduleArg,
        /// Target time as HH:MM (two digits each).
        time: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScheduleArg {
    Rest,
    Home,
}

impl From<ScheduleArg> for ScheduleKind {
    fn from(arg: ScheduleArg) -> Self {
        match arg {
            ScheduleArg::Rest => ScheduleKind::Rest,
            ScheduleArg::Home => ScheduleKind::Home,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let path = config_path(cli.config)?;

    match cli.command {
        Command::Status { json } => run_status(&path, json),
        Command::Watch { count } => run_watch(&path, count),
        Command::Config { action } => match action {
            ConfigAction::Show => run_config_show(&path),
            ConfigAction::Set { schedule, time } => run_config_set(&path, schedule.into(), &time),
        },
    }
}

// ── Config file ─────────────────────────────────────────────────────────────

fn config_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let dir = dirs::config_dir().context("could not determine the user config directory")?;
    Ok(dir.join("shift-clock").join("config.json"))
}

/// Load the config, falling back to defaults when the file is missing or
/// malformed. A malformed file is reported once so the user knows to
/// re-enter their times.
fn load_config(path: &Path) -> ShiftConfig {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return ShiftConfig::default(),
    };
    match ShiftConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "ignoring invalid config at {}: {e}; using defaults, \
                 re-enter with `shift-clock config set`",
                path.display()
            );
            ShiftConfig::default()
        }
    }
}

fn save_config(path: &Path, config: &ShiftConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;
    }
    fs::write(path, config.to_json()?)
        .with_context(|| format!("writing config to {}", path.display()))?;
    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────────

fn run_status(path: &Path, json: bool) -> Result<()> {
    let config = load_config(path);
    let (rest, home) = snapshot_pair(&config)?;

    if json {
        let out = serde_json::json!({ "rest": rest, "home": home });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render_line(&rest));
        println!("{}", render_line(&home));
    }
    Ok(())
}

/// The once-per-second re-evaluation loop.
///
/// Every tick samples the true current instant, so a delayed or skipped tick
/// (suspended terminal, laptop sleep) self-corrects on the next one. The
/// loop runs until interrupted unless `count` bounds it; process teardown
/// releases the only resource held, the loop itself.
fn run_watch(path: &Path, count: Option<u64>) -> Result<()> {
    let config = load_config(path);
    let tz = config.tz()?;
    let rest_schedule = config.rest_schedule()?;
    let home_schedule = config.home_schedule()?;

    let mut stdout = io::stdout();
    let mut ticks: u64 = 0;
    loop {
        let now = Utc::now().with_timezone(&tz);
        let rest = evaluate(&rest_schedule, ScheduleKind::Rest, now);
        let home = evaluate(&home_schedule, ScheduleKind::Home, now);

        // \x1b[K clears the remainder of the redrawn line.
        write!(stdout, "\r\x1b[K{}  |  {}", render_line(&rest), render_line(&home))?;
        stdout.flush()?;

        ticks += 1;
        if let Some(limit) = count {
            if ticks >= limit {
                writeln!(stdout)?;
                return Ok(());
            }
        }
        thread::sleep(TICK_INTERVAL);
    }
}

fn run_config_show(path: &Path) -> Result<()> {
    let config = load_config(path);
    println!("{}", config.to_json()?);
    Ok(())
}

fn run_config_set(path: &Path, kind: ScheduleKind, time: &str) -> Result<()> {
    let mut config = load_config(path);
    config.set(kind, time)?;
    save_config(path, &config)?;
    println!("{}", config.to_json()?);
    Ok(())
}

// ── Rendering ───────────────────────────────────────────────────────────────

fn snapshot_pair(config: &ShiftConfig) -> Result<(ClockState, ClockState)> {
    let tz: Tz = config.tz()?;
    let now = Utc::now().with_timezone(&tz);
    let rest = evaluate(&config.rest_schedule()?, ScheduleKind::Rest, now);
    let home = evaluate(&config.home_schedule()?, ScheduleKind::Home, now);
    Ok((rest, home))
}

fn render_line(state: &ClockState) -> String {
    match state.status {
        ClockStatus::Holiday => format!("{}: Sunday holiday", state.label),
        ClockStatus::Completed => format!("{}: 00:00:00 (done)", state.label),
        ClockStatus::Counting => format!(
            "{}: {} ({:.0}%)",
            state.label, state.diff_text, state.progress
        ),
    }
}
