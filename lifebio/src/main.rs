//! Toroidal life for a length-capped profile text field.
//!
//! `lifebio run` previews a number of generations in the terminal; `lifebio
//! update` advances the grid stored in a bio field by one generation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use lifebio::core::codec::ParseMode;
use lifebio::core::field::format_for_field;
use lifebio::core::random::options_for_date;
use lifebio::core::render::DisplayMode;
use lifebio::core::rules::RuleSet;
use lifebio::exit_codes;
use lifebio::io::bio::FileBio;
use lifebio::io::config::{DEFAULT_CONFIG_PATH, LifeConfig, load_config, write_config};
use lifebio::logging;
use lifebio::looping::{LoopConfig, run_loop};
use lifebio::seed::{Seed, default_grid, seed_grid};
use lifebio::update::{UpdateSource, run_update};

#[derive(Parser)]
#[command(
    name = "lifebio",
    version,
    about = "Toroidal cellular automaton for a length-capped text field"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `lifebio.toml`.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,

        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Print a number of generations to the terminal.
    Run {
        #[command(flatten)]
        grid: GridArgs,

        /// Generations after the initial grid.
        #[arg(long)]
        iterations: Option<u32>,

        /// Pause between generations in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Exit with a distinct code when the final grid has no live cells.
        #[arg(long)]
        fail_on_extinct: bool,
    },
    /// Advance the grid stored in the bio field by one generation.
    Update {
        #[command(flatten)]
        grid: GridArgs,

        /// File holding the bio field.
        #[arg(long)]
        bio_file: PathBuf,

        /// Show the next field without writing it.
        #[arg(long)]
        preview: bool,
    },
}

/// Options shared by `run` and `update`; each overrides the config file.
#[derive(Args, Debug, Clone, Default)]
struct GridArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    /// standard, daynight or highlife.
    #[arg(long)]
    rules: Option<RuleSet>,

    /// full or half.
    #[arg(long)]
    display: Option<DisplayMode>,

    /// Length cap of the bio field.
    #[arg(long)]
    max_length: Option<usize>,

    /// Read the initial grid from a text file.
    #[arg(long, conflicts_with_all = ["density", "seed_by_day", "pattern"])]
    input: Option<PathBuf>,

    /// Reject input files with rows of differing width.
    #[arg(long, requires = "input")]
    strict: bool,

    /// Random initial grid; without a value the configured density is used.
    #[arg(long, num_args = 0..=1, conflicts_with_all = ["seed_by_day", "pattern"])]
    density: Option<Option<f64>>,

    /// Random initial grid seeded from today's date.
    #[arg(long, conflicts_with = "pattern")]
    seed_by_day: bool,

    /// Pick rule set and display mode from today's date.
    #[arg(long)]
    random_by_day: bool,

    /// Named initial pattern (glider, blinker, toad, beacon, r-pentomino).
    #[arg(long)]
    pattern: Option<String>,
}

impl GridArgs {
    /// Config file values with command-line overrides applied.
    fn resolve_config(&self) -> Result<LifeConfig> {
        let mut cfg = load_config(&self.config)?;
        if self.random_by_day {
            let today = options_for_date(Local::now().date_naive());
            info!(rules = %today.rules, display = %today.display, "options picked by day");
            cfg.rules = today.rules;
            cfg.display = today.display;
        }
        if let Some(rows) = self.rows {
            cfg.rows = rows;
        }
        if let Some(columns) = self.columns {
            cfg.columns = columns;
        }
        if let Some(rules) = self.rules {
            cfg.rules = rules;
        }
        if let Some(display) = self.display {
            cfg.display = display;
        }
        if let Some(max_length) = self.max_length {
            cfg.max_length = max_length;
        }
        if let Some(Some(density)) = self.density {
            cfg.density = density;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Initial grid source requested on the command line, if any.
    fn seed(&self, cfg: &LifeConfig) -> Option<Seed> {
        if let Some(path) = &self.input {
            let mode = if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Padded
            };
            return Some(Seed::File {
                path: path.clone(),
                mode,
            });
        }
        if self.density.is_some() {
            return Some(Seed::Density(cfg.density));
        }
        if self.seed_by_day {
            return Some(Seed::ByDay(Local::now().date_naive()));
        }
        self.pattern.clone().map(Seed::Pattern)
    }
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force, config } => cmd_init(&config, force),
        Command::Run {
            grid,
            iterations,
            delay_ms,
            fail_on_extinct,
        } => cmd_run(&grid, iterations, delay_ms, fail_on_extinct),
        Command::Update {
            grid,
            bio_file,
            preview,
        } => cmd_update(&grid, &bio_file, preview),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        println!("{} already exists (use --force to overwrite)", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &LifeConfig::default())?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_run(
    args: &GridArgs,
    iterations: Option<u32>,
    delay_ms: Option<u64>,
    fail_on_extinct: bool,
) -> Result<i32> {
    let mut cfg = args.resolve_config()?;
    if let Some(iterations) = iterations {
        cfg.iterations = iterations;
    }
    if let Some(delay_ms) = delay_ms {
        cfg.delay_ms = delay_ms;
    }

    let initial = match args.seed(&cfg) {
        Some(seed) => seed_grid(&seed, cfg.rows, cfg.columns)?,
        None => default_grid(cfg.rows, cfg.columns)?,
    };
    let loop_config = LoopConfig {
        rules: cfg.rules,
        display: cfg.display,
        iterations: cfg.iterations,
        delay: Duration::from_millis(cfg.delay_ms),
    };

    let outcome = run_loop(initial, &loop_config, |frame| {
        println!(
            "Generation {} ({} {}, {} alive):",
            frame.generation,
            cfg.rules,
            cfg.rules.notation(),
            frame.grid.population()
        );
        println!("{}", frame.text);
        println!();
    });

    if let Some(repeat) = outcome.first_repeat {
        println!(
            "State repeats at generation {} (period {}).",
            repeat.generation, repeat.period
        );
    }
    let field = format_for_field(&outcome.final_grid, cfg.display, cfg.max_length);
    println!(
        "Field ({}/{} chars{}):",
        field.field.chars().count(),
        cfg.max_length,
        if field.is_truncated() { ", truncated" } else { "" }
    );
    println!("{}", field.field);

    if fail_on_extinct && outcome.final_grid.is_extinct() {
        return Ok(exit_codes::EXTINCT);
    }
    Ok(exit_codes::OK)
}

fn cmd_update(args: &GridArgs, bio_file: &Path, preview: bool) -> Result<i32> {
    let cfg = args.resolve_config()?;
    let initial = args
        .seed(&cfg)
        .map(|seed| seed_grid(&seed, cfg.rows, cfg.columns))
        .transpose()
        .context("seed initial grid")?;

    let store = FileBio::new(bio_file);
    let outcome = run_update(&store, &cfg, initial, preview)?;

    if outcome.source == UpdateSource::DefaultGlider {
        println!("Bio field was empty; started from a glider.");
    }
    println!("{}", outcome.text.display);
    println!();
    if outcome.written {
        println!(
            "Updated {} ({} chars).",
            bio_file.display(),
            outcome.text.field.chars().count()
        );
    } else {
        println!("Preview only; {} not written.", bio_file.display());
        println!("{}", outcome.text.field);
    }
    Ok(exit_codes::OK)
}
