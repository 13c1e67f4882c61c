//! Controller Facts CLI
//!
//! The `cfacts` entry point: gathers facts about the controller host
//! (user identity, configuration file, interpreter) selected by a list
//! of gather-subset tokens, and prints the namespaced document on
//! stdout. All diagnostics go to stderr.

use cf_common::{FactsDocument, OutputFormat};
use clap::{Args, Parser, Subcommand};
use cf_core::collect::{Collector, InvocationContext, ToolRunner};
use cf_core::exit_codes::ExitCode;
use cf_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use cf_core::probe::SystemProbe;
use tracing::error;

/// Controller Facts - gather facts about the automation controller host
#[derive(Parser)]
#[command(name = "cfacts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,

    #[command(flatten)]
    gather: GatherArgs,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Minimum log level (also CFACTS_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log output format (also CFACTS_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Gather controller facts (the default when no subcommand is given)
    Gather(GatherArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
struct GatherArgs {
    /// Fact subset tokens: category names, `!name` to exclude,
    /// `all`/`!all` to reset the selection (repeatable; default: all)
    #[arg(short = 's', long = "subset", value_name = "TOKEN")]
    subset: Vec<String>,

    /// Path to the controller configuration file
    #[arg(long, env = "CFACTS_CONFIG_FILE", value_name = "PATH")]
    config_file: Option<String>,

    /// Path to the target interpreter
    #[arg(long, env = "CFACTS_INTERPRETER", value_name = "PATH")]
    interpreter: Option<String>,

    /// Declare that this invocation runs per managed host rather than
    /// once per automation run (emits a warning)
    #[arg(long)]
    per_host: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(cli.global.log_level, cli.global.log_format);
    init_logging(&log_config);

    let code = match cli.command {
        Some(Commands::Version) => {
            println!("cfacts {}", env!("CARGO_PKG_VERSION"));
            ExitCode::Clean
        }
        Some(Commands::Gather(args)) => run_gather(&args, cli.global.format),
        None => run_gather(&cli.gather, cli.global.format),
    };

    std::process::exit(code.as_i32());
}

fn run_gather(args: &GatherArgs, format: OutputFormat) -> ExitCode {
    let ctx = InvocationContext {
        config_file: args.config_file.clone(),
        interpreter: args.interpreter.clone(),
        run_once: !args.per_host,
    };

    let runner = ToolRunner::new();
    let probe = SystemProbe;
    let collector = Collector::new(&runner, &probe);

    match collector.gather(&args.subset, &ctx) {
        Ok(doc) => emit(&doc, format),
        Err(err) => {
            error!(category = %err.category(), "{}", err);
            ExitCode::from(&err)
        }
    }
}

fn emit(doc: &FactsDocument, format: OutputFormat) -> ExitCode {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(doc).map_err(|e| e.to_string()),
        OutputFormat::Pretty => serde_json::to_string_pretty(doc).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(doc).map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(payload) => {
            println!("{}", payload);
            ExitCode::Clean
        }
        Err(err) => {
            error!("failed to serialize fact document: {}", err);
            ExitCode::InternalError
        }
    }
}
