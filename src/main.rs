//! Trace Operator CLI
//!
//! Resolves Jaeger manifests offline: applies every default and
//! compatibility rule the operator would, prints the resolved manifest and
//! reports the chosen deployment topology.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kube::CustomResourceExt;
use trace_operator::{Error, Jaeger, OperatorConfig, Platform, StrategySelector};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Trace Operator - resolve Jaeger instances and select their topology
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Operator configuration file (YAML)
    #[arg(long, env = "OPERATOR_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Platform the operator runs on (kubernetes, openshift)
    #[arg(long, env = "PLATFORM", global = true)]
    platform: Option<String>,

    /// Default image for the dependencies job
    #[arg(long, env = "JAEGER_SPARK_DEPENDENCIES_IMAGE", global = true)]
    dependencies_image: Option<String>,

    /// Default image for the index cleaner job
    #[arg(long, env = "JAEGER_ES_INDEX_CLEANER_IMAGE", global = true)]
    es_index_cleaner_image: Option<String>,

    /// Default image for the index rollover job
    #[arg(long, env = "JAEGER_ES_ROLLOVER_IMAGE", global = true)]
    es_rollover_image: Option<String>,

    /// Documentation link shown in the UI menu
    #[arg(long, env = "DOCUMENTATION_URL", global = true)]
    documentation_url: Option<String>,

    /// A search cluster operator is available to provision clusters
    #[arg(long, env = "ES_PROVISION", global = true)]
    es_provision: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a Jaeger manifest and print the result
    Resolve {
        /// Manifest to resolve, `-` for stdin
        #[arg(short, long, default_value = "-")]
        file: String,
    },
    /// Print the Jaeger CustomResourceDefinition
    Crd,
}

// =============================================================================
// Main
// =============================================================================

/// Exit status for input the user can fix (bad manifest or config)
const EXIT_USER_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(err) if err.is_user_error() => EXIT_USER_ERROR,
        _ => 1,
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    init_logging(args)?;

    let config = operator_config(args)?;
    info!(
        version = trace_operator::VERSION,
        platform = %config.platform,
        es_provision = config.es_provision,
        "Starting Trace Operator"
    );

    match &args.command {
        Command::Resolve { file } => resolve(file, &config),
        Command::Crd => {
            print!("{}", render(&Jaeger::crd())?);
            Ok(())
        }
    }
}

fn resolve(file: &str, config: &OperatorConfig) -> anyhow::Result<()> {
    let raw = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file))?
    };

    if raw.trim().is_empty() {
        return Err(Error::InvalidManifest {
            path: file.to_string(),
            reason: "empty document".to_string(),
        }
        .into());
    }

    let mut jaeger: Jaeger = serde_yaml::from_str(&raw).map_err(|e| Error::InvalidManifest {
        path: file.to_string(),
        reason: e.to_string(),
    })?;

    let strategy = StrategySelector::new(config).select(&mut jaeger, Vec::new());
    info!(
        instance = %jaeger.instance_name(),
        strategy = %strategy,
        provision_elasticsearch = strategy.elasticsearch().is_some_and(|es| es.provision),
        "Resolved Jaeger instance"
    );

    print!("{}", render(&jaeger)?);
    Ok(())
}

fn render<T: serde::Serialize>(value: &T) -> trace_operator::Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

// =============================================================================
// Configuration
// =============================================================================

fn operator_config(args: &Args) -> trace_operator::Result<OperatorConfig> {
    let mut config = match &args.config {
        Some(path) => OperatorConfig::from_file(path)?,
        None => OperatorConfig::default(),
    };

    if let Some(platform) = &args.platform {
        config.platform = Platform::from(platform.as_str());
    }
    if let Some(image) = &args.dependencies_image {
        config.dependencies_image = image.clone();
    }
    if let Some(image) = &args.es_index_cleaner_image {
        config.es_index_cleaner_image = image.clone();
    }
    if let Some(image) = &args.es_rollover_image {
        config.es_rollover_image = image.clone();
    }
    if let Some(url) = &args.documentation_url {
        config.documentation_url = url.clone();
    }
    if args.es_provision {
        config.es_provision = true;
    }

    Ok(config)
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("kube=info".parse()?);

    // logs go to stderr so the resolved manifest can be piped
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
