//! Liftup command line.
//!
//! Usage:
//! ```text
//! liftup list                        # show the available presets
//! liftup run 4                       # generate and save preset 04
//! liftup run 1 --seed 7              # repeatable random preset
//! liftup inspect tracks/grid/grid.track
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use liftup::blueprint::BlueprintFactory;
use liftup::config::LiftupConfig;
use liftup::presets::Preset;
use liftup::{io, track, xml};

/// Procedural track generator for drone racing levels
#[derive(Parser)]
#[command(name = "liftup")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Settings file; defaults apply when absent
    #[arg(short, long, global = true, default_value = "liftup.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available presets
    List,

    /// Generate a preset track and save it
    Run {
        /// Preset number, as shown by `list`
        number: u8,

        /// Seed for repeatable random presets
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print a saved track as JSON
    Inspect {
        /// Path to a `.track` file
        file: PathBuf,

        /// Print the parsed objects instead of the raw document
        #[arg(long)]
        instances: bool,
    },
}

fn load_config(path: &Path) -> liftup::Result<LiftupConfig> {
    if path.exists() {
        LiftupConfig::load(path)
    } else {
        Ok(LiftupConfig::default())
    }
}

fn cmd_list() {
    for preset in Preset::ALL {
        let label = preset.to_string();
        println!("{label:<18} {}", preset.description());
    }
}

fn cmd_run(config: &LiftupConfig, number: u8, seed: Option<u64>) -> liftup::Result<ExitCode> {
    let Some(preset) = Preset::from_number(number) else {
        eprintln!("no preset numbered {number}; see `liftup list`");
        return Ok(ExitCode::FAILURE);
    };
    let path = preset.run(config, seed)?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_inspect(config: &LiftupConfig, file: &Path, instances: bool) -> liftup::Result<ExitCode> {
    let value = if instances {
        let track = track::load_track(file, &mut BlueprintFactory::new())?;
        let serialized = config.normalizer().execute_all(track.instances());
        serde_json::to_value(serialized)?
    } else {
        xml::decode(&io::read_to_string(file)?)?
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for liftup.
    // Override with RUST_LOG (e.g. RUST_LOG=liftup=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("liftup=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = load_config(&cli.config).and_then(|config| match cli.command {
        Commands::List => {
            cmd_list();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { number, seed } => cmd_run(&config, number, seed),
        Commands::Inspect { file, instances } => cmd_inspect(&config, &file, instances),
    });

    result.unwrap_or_else(|err| {
        error!("{err}");
        ExitCode::FAILURE
    })
}
