//! Complete a word with look(1), recased to match the query
//!
//! Usage:
//!   cargo run -p look_complete -- AsSem
//!   cargo run -p look_complete -- --dict /usr/share/dict/web2 --dflag --format json Az
//!   cargo run -p look_complete -- --config look.toml --min-keyword-length 2 -v ab

use clap::{Parser, ValueEnum};
use look_complete_core::{LookCommand, LookConfig, LookSource};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "look_complete")]
#[command(about = "Case-aware word completion backed by look(1)")]
struct Args {
    /// Query to complete
    query: String,

    /// TOML configuration with [params] and [options] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Alternate word list (defaults to look's dictionary)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Case-fold the lookup even with a custom dictionary
    #[arg(long)]
    dflag: bool,

    /// Ignore trailing non-alphanumeric characters in the lookup
    #[arg(long)]
    fflag: bool,

    /// Return words as look prints them
    #[arg(long)]
    no_convert_case: bool,

    /// Minimum alphanumeric query length for case-folded lookups
    #[arg(long)]
    min_keyword_length: Option<usize>,

    /// look binary to run
    #[arg(long, default_value = "look")]
    look: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log lookups to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<LookConfig> {
    let mut config = match &args.config {
        Some(path) => LookConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => LookConfig::default(),
    };

    // Command-line flags override the file
    if args.dict.is_some() {
        config.params.dict = args.dict.clone();
    }
    config.params.dflag |= args.dflag;
    config.params.fflag |= args.fflag;
    if args.no_convert_case {
        config.params.convert_case = false;
    }
    if let Some(n) = args.min_keyword_length {
        config.options.min_keyword_length = n;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    debug!(?config, "effective configuration");

    let source = LookSource::with_lookup(LookCommand::with_program(&args.look));
    let items = source.gather(&args.query, &config.params, &config.options)?;

    match args.format {
        Format::Text => {
            for item in &items {
                println!("{}", item.word);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&items)?),
    }

    Ok(())
}
