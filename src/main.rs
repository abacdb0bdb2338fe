//! # pidplot
//!
//! Command-line front end for the PID temperature-control lab.
//!
//! ```bash
//! # Slice a stored log into rise and oscillation segments and plot them
//! pidplot analyze lab5_sample2.csv --target 60
//!
//! # Plot live data from the controller
//! pidplot live --port /dev/ttyACM0 --export run1.csv
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use pidplot::acquisition::{open_serial, ReaderSource};
use pidplot::analysis::{analyze, BandMode, LogReader};
use pidplot::app::{run_analysis, run_live};
use pidplot::config::PidPlotConfig;

#[derive(Parser)]
#[command(name = "pidplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML or JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Proportional,
    Hysteresis,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice a stored instrument log and plot rise and oscillation segments
    Analyze {
        /// Tab-separated log exported by the instrument
        #[arg(value_name = "LOG")]
        log: PathBuf,

        /// Target temperature (C) whose first crossing ends the rise
        #[arg(short, long)]
        target: Option<f64>,

        /// Rows kept in the oscillation segment
        #[arg(short, long)]
        window: Option<usize>,

        /// Metadata lines before the header line
        #[arg(long)]
        preamble: Option<usize>,

        /// Band shape drawn over the oscillation segment
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Band half-width (proportional) or width (hysteresis), in C
        #[arg(long)]
        band_width: Option<f64>,

        /// Setpoint for the offset annotation (defaults to the target)
        #[arg(long)]
        setpoint: Option<f64>,

        /// Print the summary without opening a window
        #[arg(long)]
        no_gui: bool,
    },

    /// Plot temperature and power live from the controller's serial port
    Live {
        /// Serial port name
        #[arg(short, long)]
        port: Option<String>,

        #[arg(short, long)]
        baud: Option<u32>,

        /// Read timeout per packet, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Acquisition tick interval, in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Wait after opening the port, in milliseconds
        #[arg(long)]
        settle_ms: Option<u64>,

        /// Replay packets from a capture file instead of a serial port
        #[arg(long, value_name = "FILE", conflicts_with = "port")]
        replay: Option<PathBuf>,

        /// Write the table to this CSV file when the window closes
        #[arg(short, long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut cfg = match &cli.config {
        Some(path) => PidPlotConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PidPlotConfig::default(),
    };

    match cli.command {
        Commands::Analyze {
            log,
            target,
            window,
            preamble,
            mode,
            band_width,
            setpoint,
            no_gui,
        } => {
            let a = &mut cfg.analysis;
            if let Some(v) = target {
                a.target_temperature = v;
            }
            if let Some(v) = window {
                a.oscillation_window = v;
            }
            if let Some(v) = preamble {
                a.preamble_lines = v;
            }
            if setpoint.is_some() {
                a.setpoint = setpoint;
            }
            a.band = band_mode(a.band, mode, band_width);
            run_analyze(log, &cfg, no_gui)
        }
        Commands::Live {
            port,
            baud,
            timeout_ms,
            tick_ms,
            settle_ms,
            replay,
            export,
        } => {
            let q = &mut cfg.acquisition;
            if let Some(v) = port {
                q.port = v;
            }
            if let Some(v) = baud {
                q.baud_rate = v;
            }
            if let Some(v) = timeout_ms {
                q.timeout_ms = v;
            }
            if let Some(v) = tick_ms {
                q.tick_ms = v;
            }
            if let Some(v) = settle_ms {
                q.settle_ms = v;
            }
            run_acquisition(&cfg, replay, export)
        }
    }
}

/// Apply `--mode`/`--band-width` on top of the configured band.
fn band_mode(current: BandMode, mode: Option<ModeArg>, width: Option<f64>) -> BandMode {
    let current_width = match current {
        BandMode::Proportional { half_width } => half_width,
        BandMode::Hysteresis { width } => width,
    };
    let w = width.unwrap_or(current_width);
    match (mode, current) {
        (Some(ModeArg::Proportional), _) | (None, BandMode::Proportional { .. }) => {
            BandMode::Proportional { half_width: w }
        }
        (Some(ModeArg::Hysteresis), _) | (None, BandMode::Hysteresis { .. }) => {
            BandMode::Hysteresis { width: w }
        }
    }
}

fn run_analyze(path: PathBuf, cfg: &PidPlotConfig, no_gui: bool) -> Result<()> {
    let log = LogReader::new(cfg.analysis.preamble_lines)
        .read_path(&path)
        .with_context(|| format!("Failed to read log {}", path.display()))?;
    info!("Loaded {} rows from {}", log.row_count(), path.display());

    let report = analyze(&log, &cfg.analysis)?;
    println!("rows:            {}", log.row_count());
    println!("minimum index:   {}", report.minimum_index);
    println!("crossing index:  {}", report.crossing_index);
    println!("rise time (s):   {:.3}", report.rise_time_s);
    println!("rise rows:       {}", report.rise.len());
    println!("oscillation rows:{}", report.oscillation.len());
    if let Some(band) = &report.band {
        println!("oscillation mean (C): {:.3}", band.mean);
        println!("offset from setpoint (C): {:+.3}", band.offset);
    }

    if no_gui {
        return Ok(());
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());
    run_analysis(&name, report).map_err(|e| anyhow!("GUI error: {e}"))
}

fn run_acquisition(cfg: &PidPlotConfig, replay: Option<PathBuf>, export: Option<PathBuf>) -> Result<()> {
    let q = &cfg.acquisition;
    let result = match replay {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open capture {}", path.display()))?;
            info!("Replaying packets from {}", path.display());
            run_live(ReaderSource::new(BufReader::new(file)), q, export)
        }
        None => {
            let source = open_serial(q)?;
            run_live(source, q, export)
        }
    };
    result.map_err(|e| anyhow!("GUI error: {e}"))
}
