use clap::{Parser, ValueEnum};
use gronkh_tv::{Config, GronkhApi, OutputFormat, Plugin, PluginError, TerminalHost, logging};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Base URL used when the plugin is started by hand.
const DEFAULT_PLUGIN_URL: &str = "plugin://plugin.video.gronkh.tv/";

/// Browse and play the gronkh.tv stream archive.
///
/// Arguments mirror a host invocation: base URL, handle and the URL-encoded
/// parameters of the requested navigation step.
#[derive(Parser, Debug)]
#[command(name = "gronkh-tv", version, about)]
struct Cli {
    /// Base URL the plugin was invoked with
    #[arg(default_value = DEFAULT_PLUGIN_URL)]
    plugin_url: String,

    /// Handle of the listing the host is waiting for
    #[arg(default_value_t = 0)]
    handle: i32,

    /// Invocation parameters, e.g. "?action=listing&category=recent"
    #[arg(default_value = "")]
    params: String,

    /// Output format for listings and resolved streams
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn run(cli: Cli) -> Result<(), PluginError> {
    let config = Config::load(cli.config.as_deref())?;
    let api = GronkhApi::from_config(&config)?;
    let host = TerminalHost::new(io::stdout(), cli.handle, cli.format.into());

    let mut plugin = Plugin::new(api, host, &cli.plugin_url, config.language);
    plugin.router(&cli.params)
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    info!(
        "{} version {} initialized",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
