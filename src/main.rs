use anyhow::Result;
use blocksnip::{remove_duplicate_block, Cli, FixOutcome};
use clap::Parser;

fn main() -> Result<()> {
    // Diagnostics go to stderr so the outcome line on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match remove_duplicate_block(&cli.file, &cli.markers())? {
        FixOutcome::Removed(span) => {
            println!(
                "Removed duplicate section from line {} to {}",
                span.start + 1,
                span.end + 1
            );
        }
        FixOutcome::NotFound => {
            println!("Could not find duplicate section to remove");
        }
    }

    Ok(())
}
