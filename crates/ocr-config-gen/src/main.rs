//! ocr-config-gen: OCR3 contract configuration generator
//!
//! Reads one JSON request describing the oracle committee and plugin type,
//! writes the contract configuration as JSON to stdout. Logs go to stderr.
//!
//! ```text
//! ocr-config-gen '{"nodes":[...],"pluginType":"commit","feedChainSelector":"123"}'
//! ocr-config-gen --input request.json --pretty
//! cat request.json | ocr-config-gen --input -
//! ```

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ocr_config_gen::{
    ConfigGenerationApi, ConfigGenerationService, GeneratorConfig, KeyLengthPolicy,
    ReferenceSynthesizer, UnifiedRequest,
};

/// ocr-config-gen: OCR3 contract configuration generator
#[derive(Parser, Debug)]
#[command(name = "ocr-config-gen")]
#[command(about = "Generate OCR3 contract configuration from oracle node descriptors")]
#[command(version)]
struct Args {
    /// Request JSON (alternative to --input)
    request: Option<String>,

    /// Read the request from a file, or `-` for stdin
    #[arg(short, long, conflicts_with = "request")]
    input: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Zero-pad or truncate keys of the wrong length instead of failing
    #[arg(long)]
    legacy_key_padding: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Defaults, then `lookup` (the environment), then flags.
fn load_config(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> GeneratorConfig {
    let mut config = GeneratorConfig::from_lookup(lookup);
    if args.legacy_key_padding {
        config.key_length_policy = KeyLengthPolicy::LegacyZeroPad;
    }
    if args.pretty {
        config.pretty_output = true;
    }
    config
}

fn read_request(args: &Args, mut stdin: impl Read) -> Result<String> {
    if let Some(text) = &args.request {
        return Ok(text.clone());
    }
    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read request from stdin")?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        None => bail!("no request given: pass the request JSON or --input <path>"),
    }
}

fn run(
    args: &Args,
    config: GeneratorConfig,
    stdin: impl Read,
    mut stdout: impl Write,
) -> Result<()> {
    debug!(
        policy = %config.key_length_policy,
        pretty = config.pretty_output,
        "configuration loaded"
    );

    let text = read_request(args, stdin)?;
    let request = UnifiedRequest::from_json(&text).context("invalid request")?;

    let service = ConfigGenerationService::new(ReferenceSynthesizer::new(), config);
    let output = service
        .generate(&request)
        .context("failed to generate contract configuration")?;

    writeln!(stdout, "{}", output.to_json(service.config().pretty_output)?)
        .context("failed to write output")?;
    Ok(())
}

/// Exit status for a run; failures are reported once on `stderr`.
fn exit_status(result: Result<()>, mut stderr: impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(stderr, "Error: {e:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args, |key| std::env::var(key).ok());
    let result = run(&args, config, io::stdin().lock(), io::stdout().lock());
    ExitCode::from(exit_status(result, io::stderr().lock()))
}
