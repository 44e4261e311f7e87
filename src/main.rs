/*!
 * appmanifest CLI - Command Line Interface
 */

use appmanifest::{
    config::{LogLevel, ManifestConfig, OutputFormat},
    error::{Result, EXIT_SUCCESS, EXIT_USAGE},
    logging,
    manifest::ManifestBuilder,
    output,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const USAGE: &str = "appmanifest [options] /path/to/some.pkg";

#[derive(Parser)]
#[command(name = "appmanifest")]
#[command(
    about = "Generate an app manifest plist with per-chunk MD5s for a package",
    override_usage = USAGE,
    disable_version_flag = true
)]
struct Cli {
    /// Package to describe
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the version and git revision
    #[arg(short = 'V', long = "version")]
    version: bool,

    /// URL of the pkg as it will be on the server
    #[arg(long)]
    url: Option<String>,

    /// MD5 chunk size in bytes (default: 10485760)
    #[arg(
        long = "md5size",
        alias = "md5-size",
        value_name = "BYTES",
        allow_negative_numbers = true
    )]
    md5_size: Option<i64>,

    /// Output encoding
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Write the manifest to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Load defaults from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Log file (JSON lines, default: stderr)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum FormatArg {
    Xml,
    Binary,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => OutputFormat::Xml,
            FormatArg::Binary => OutputFormat::Binary,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(category = e.category().as_str(), "manifest generation failed");
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", appmanifest::version_info());
        return Ok(());
    }

    let mut config = match cli.config {
        Some(ref config_path) => ManifestConfig::from_file(config_path)?,
        None => ManifestConfig::default(),
    };

    // Override config with CLI arguments
    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(md5_size) = cli.md5_size {
        config.md5_size = md5_size;
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if cli.output.is_some() {
        config.output = cli.output;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.log.is_some() {
        config.log_file = cli.log;
    }
    config.verbose |= cli.verbose;

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let Some(path) = cli.path else {
        eprintln!("must specify a path to a pkg");
        println!("{}", USAGE);
        std::process::exit(EXIT_USAGE);
    };

    let manifest = ManifestBuilder::new()
        .with_url(config.url.clone())
        .with_md5_size(config.md5_size)
        .build_from_path(&path)?;

    match config.output {
        Some(ref out_path) => output::write_manifest_file(&manifest, config.format, out_path),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            output::write_manifest(&manifest, config.format, &mut handle)
        }
    }
}
