//! Entry point for the prose-to-literal formatter.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Format the input file and print the literal.
//! - Save the literal as `<stem>_formatted.txt` in the working directory.

use anyhow::{Result, anyhow};
use prose_literal::config::{AppConfig, load_config};
use prose_literal::reader::format_from_path_with;
use prose_literal::{fragmenter, output};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "prose-literal <file.txt> [variable_name]";
const SEPARATOR_WIDTH: usize = 60;
const SAMPLE_TEXT: &str = "This is a sample sentence. Here is another one with an exclamation! \
And is this a question? Finally, this is the last sentence of the sample.";

struct CliArgs {
    input: Option<PathBuf>,
    variable_name: Option<String>,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let Some(input) = args.input else {
        print_usage();
        print_demo(&config);
        return Ok(());
    };

    let options = config.format_options(args.variable_name.as_deref());
    info!(
        path = %input.display(),
        variable = %options.variable_name,
        "Formatting file"
    );
    let result = format_from_path_with(&input, &options);

    if config.echo_to_stdout {
        println!("Formatted text:");
        println!("{result}");
        println!("\n{}\n", "=".repeat(SEPARATOR_WIDTH));
    }

    report_save(&input, &result, &config);
    Ok(())
}

fn report_save(input: &Path, result: &str, config: &AppConfig) {
    let name = output::output_path_for(input, &config.output_suffix, &config.output_extension);
    match output::save_formatted_text(
        input,
        result,
        &config.output_suffix,
        &config.output_extension,
    ) {
        Ok(absolute) => {
            println!("Saved formatted file: {}", name.display());
            println!("Location: {}", absolute.display());
        }
        Err(err) => {
            warn!(path = %name.display(), "Failed to save formatted text: {err}");
            println!("{err}");
            println!("The result was shown in the console but could not be saved.");
        }
    }
}

fn parse_args() -> Result<CliArgs> {
    let mut args = env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let variable_name = args.next();
    if let Some(extra) = args.next() {
        return Err(anyhow!("Unexpected argument `{extra}`. Usage: {USAGE}"));
    }
    Ok(CliArgs {
        input,
        variable_name,
    })
}

fn print_usage() {
    println!("Usage: {USAGE}");
    println!("Example: prose-literal my_text.txt");
    println!("Example: prose-literal my_text.txt my_variable");
    println!("The result is also saved as <file>_formatted.txt in the current directory.");
    println!();
}

fn print_demo(config: &AppConfig) {
    let options = config.format_options(None);
    println!("Sample output:");
    println!("{}", fragmenter::format_with(SAMPLE_TEXT, &options));
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!(%level, "RUST_LOG is set; ignoring config log level");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
