use asset_sync::{compile_assets, SyncConfig};
use clap::Parser;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asset-sync")]
#[command(about = "Recompile stale model/texture assets via the external tinygl_ac compiler", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root the default paths are derived from
    #[arg(long)]
    root: Option<PathBuf>,

    /// Source asset directory (default: <root>/tests/assets)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Compiled asset directory (default: <root>/build/tests/assets)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Asset compiler executable (default: probed under <root>/build/tools/asset_compiler)
    #[arg(short, long)]
    compiler: Option<PathBuf>,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Info
        })
        .init();

    let root = cli
        .root
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = SyncConfig::with_root(&root);
    if let Some(input) = cli.input {
        config.input_dir = input;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(compiler) = cli.compiler {
        config.compiler_path = compiler;
    }

    // Per-file compile failures are already logged and never fail the run;
    // a missing compiler is reported the same way, without an exit status.
    match compile_assets(&config) {
        Ok(report) => {
            if !cli.quiet {
                eprintln!(
                    "Asset sync complete: {} compiled, {} up to date, {} failed",
                    report.compiled, report.up_to_date, report.failed
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}
