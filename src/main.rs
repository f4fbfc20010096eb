use anyhow::Result;
use clap::Parser;
use image_resizer::cli::{
    error_suggestion, execute_formats, execute_probe, execute_resize, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = matches!(&cli.command, Commands::Resize(args) if args.quiet);
    init_tracing(cli.verbose, quiet);

    match cli.command {
        Commands::Resize(args) => match execute_resize(args).await {
            Ok(summary) if summary.all_succeeded() => {}
            Ok(summary) => {
                if !quiet {
                    eprintln!("⚠️  {}個のファイルでエラーが発生しました", summary.failed);
                }
                std::process::exit(1);
            }
            Err(error) => {
                eprintln!("❌ エラー: {error:#}");
                if let Some(suggestion) = error_suggestion(&error) {
                    eprintln!("💡 {suggestion}");
                }
                std::process::exit(1);
            }
        },
        Commands::Probe { inputs, recursive } => {
            let failures = execute_probe(inputs, recursive).await?;
            if failures > 0 {
                tracing::warn!("{failures} file(s) could not be probed");
            }
        }
        Commands::Formats => execute_formats(),
    }

    Ok(())
}

/// RUST_LOG が設定されていればそれを優先する
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
