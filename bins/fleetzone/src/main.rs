//! fleetzone: coastal regions, EC30 fishing-ground zones, vessel distances
//! and transaction identifiers from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use fleetzone_cli::output::Status;
use fleetzone_core::config::Config;
use fleetzone_core::error::exit_codes;
use fleetzone_core::{Error, ErrorCode};
use fleetzone_geo::{Coordinate, IdentifierKind};
use fleetzone_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{fleet, identify, locate};

#[derive(Parser)]
#[command(name = "fleetzone")]
#[command(author, version, about = "Fishing-fleet zone and identifier tools", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a fleetzone.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log filter directive (overrides the configured level; RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a position into a coastal region (A-D, X when outside)
    Region {
        /// Position as "lat,lng"
        #[arg(allow_hyphen_values = true, value_parser = commands::parse_position)]
        position: Coordinate,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate the EC30 fishing-ground zone of a position
    Zone {
        /// Position as "lat,lng"
        #[arg(allow_hyphen_values = true, value_parser = commands::parse_position)]
        position: Coordinate,

        /// Grid used to number sub-zones
        #[arg(long, value_enum, default_value_t = Layout::Square)]
        layout: Layout,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Great-circle distance between two positions
    Distance {
        /// From position as "lat,lng"
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_position)]
        from: Coordinate,

        /// To position as "lat,lng"
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_position)]
        to: Coordinate,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format an identifier from explicit parts
    Identifier {
        /// Identifier prefix, e.g. PA
        #[arg(long, default_value = "PA")]
        prefix: String,

        /// Numeric component (distance in km or zone number)
        #[arg(long, allow_hyphen_values = true)]
        component: f64,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Daily sequence number
        #[arg(long, default_value_t = 1)]
        sequence: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Issue a vessel-to-vessel transaction identifier
    Transaction {
        /// Own position as "lat,lng" (defaults to the configured fallback)
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_position)]
        own: Option<Coordinate>,

        /// Counterpart position as "lat,lng"
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_position)]
        other: Coordinate,

        /// Kind of transaction
        #[arg(long, value_enum, default_value_t = Kind::Transaction)]
        kind: Kind,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Records of this kind already stored for the date
        #[arg(long, default_value_t = 0)]
        existing: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Issue a catch record identifier for a catch site
    Catch {
        /// Catch site as "lat,lng"
        #[arg(allow_hyphen_values = true, value_parser = commands::parse_position)]
        site: Coordinate,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Catch records already stored for the date
        #[arg(long, default_value_t = 0)]
        existing: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List vessels near a position from a JSON file
    Nearby {
        /// JSON array of {"id", "location"} records
        #[arg(long)]
        fleet: PathBuf,

        /// Origin as "lat,lng" (defaults to the configured fallback)
        #[arg(long, allow_hyphen_values = true, value_parser = commands::parse_position)]
        origin: Option<Coordinate>,

        /// Radius in km (defaults to tracking.nearby_radius_km)
        #[arg(long, allow_hyphen_values = true)]
        radius: Option<f64>,

        /// Maximum vessels to list, 0 for all (defaults to tracking.max_results)
        #[arg(long)]
        max: Option<usize>,

        /// Include vessels outside the radius and without a position
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the fishing grounds and their reachable zone numbers
    Grounds {
        /// Grid used to number sub-zones
        #[arg(long, value_enum, default_value_t = Layout::Square)]
        layout: Layout,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether the command was asked for JSON output
    fn json(&self) -> bool {
        match *self {
            Commands::Region { json, .. }
            | Commands::Zone { json, .. }
            | Commands::Distance { json, .. }
            | Commands::Identifier { json, .. }
            | Commands::Transaction { json, .. }
            | Commands::Catch { json, .. }
            | Commands::Nearby { json, .. }
            | Commands::Grounds { json, .. } => json,
        }
    }
}

/// Sub-zone numbering grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// floor(sqrt(n)) cells per axis, clamped to n
    Square,
    /// Exact factorisation of n, every number reachable
    Balanced,
}

/// Kind of vessel-to-vessel transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Transaction,
    TwoShare,
    FourShare,
}

impl From<Kind> for IdentifierKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Transaction => IdentifierKind::Transaction,
            Kind::TwoShare => IdentifierKind::TwoShare,
            Kind::FourShare => IdentifierKind::FourShare,
        }
    }
}

const VERBOSE_FILTER: &str = "fleetzone=debug,fleetzone_core=debug,fleetzone_geo=debug";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.command.json();

    // A level given on the command line is installed before the config is
    // read, so configuration loading itself is logged.
    let cli_level = if cli.verbose {
        Some(VERBOSE_FILTER.to_string())
    } else {
        cli.log_level.clone()
    };
    if let Some(level) = &cli_level {
        init_telemetry(TelemetryConfig::with_level(level.clone()));
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_failure(&e, json),
    };

    if cli_level.is_none() {
        init_telemetry(TelemetryConfig {
            show_target: config.schema.logging.show_target,
            ..TelemetryConfig::with_level(config.schema.logging.level.clone())
        });
    }
    tracing::debug!(
        path = config.path.as_deref().unwrap_or("defaults"),
        "configuration loaded"
    );

    let result = match cli.command {
        Commands::Region { position, json } => locate::region(&position, json),
        Commands::Zone { position, layout, json } => locate::zone(&position, layout, json),
        Commands::Distance { from, to, json } => locate::distance(&from, &to, json),
        Commands::Identifier { prefix, component, date, sequence, json } => {
            identify::identifier(&prefix, component, date.as_deref(), sequence, json)
        }
        Commands::Transaction { own, other, kind, date, existing, json } => identify::transaction(
            &config,
            own,
            other,
            kind.into(),
            date.as_deref(),
            existing,
            json,
        ),
        Commands::Catch { site, date, existing, json } => {
            identify::catch(&config, site, date.as_deref(), existing, json)
        }
        Commands::Nearby { fleet: path, origin, radius, max, all, json } => {
            let options = fleet::NearbyOptions {
                origin: origin.unwrap_or_else(|| config.schema.location.fallback()),
                radius_km: radius.unwrap_or(config.schema.tracking.nearby_radius_km),
                max_results: max.unwrap_or(config.schema.tracking.max_results),
                include_all: all,
            };
            fleet::nearby(&path, &options, json)
        }
        Commands::Grounds { layout, json } => fleet::grounds(layout, json),
    };

    if cli.metrics {
        let snapshot = fleetzone_telemetry::metrics().export_json();
        eprintln!("{}", serde_json::to_string_pretty(&snapshot).unwrap_or_default());
    }

    match result {
        Ok(()) => ExitCode::from(exit_code_byte(exit_codes::SUCCESS)),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            match e.downcast_ref::<Error>() {
                Some(error) => report_failure(error, json),
                None => report_failure(&Error::new(ErrorCode::Internal, format!("{e:#}")), json),
            }
        }
    }
}

fn init_telemetry(config: TelemetryConfig) {
    if let Err(e) = fleetzone_telemetry::init_with_config(config) {
        eprintln!("warning: {e}");
    }
}

/// Print the error (as an `ErrorReport` on stdout with `--json`) and pick
/// the exit code.
fn report_failure(error: &Error, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(&error.to_report()) {
            Ok(report) => println!("{report}"),
            Err(_) => Status::error(&error.to_string()),
        }
    } else {
        Status::error(&error.to_string());
    }
    ExitCode::from(exit_code_byte(error.exit_code()))
}

fn exit_code_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
