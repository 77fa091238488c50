//! mailquote: Command-line interface for quote-aware email truncation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mailquote::config::{path_resolver, AppConfig};
use mailquote::{StripMetadata, StripResult};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample reply thread used by the `demo` command
const DEMO_EMAIL: &str = "Hello, I agree with your proposal.

Let me know if you need any changes.

On 2025-01-01, Bob wrote:
> Thanks for the quick response.
>
> I think we should proceed with option A.
> Here are the reasons:
> 1. Better performance
> 2. Lower cost
> 3. Easier maintenance
> 4. More scalable
> 5. Industry standard
> 6. Good documentation
> 7. Active community
> 8. Proven track record
> 9. Compatible with existing systems
> 10. Easy to learn
> 11. More features
> 12. Better support
>
> What do you think?
>
> Best regards,
> Bob
>
>
> On 2024-12-25, Alice wrote:
> > Hi Bob,
> >
> > I wanted to discuss the project timeline.
> > We have two options:
> > Option A: Fast track (2 weeks)
> > Option B: Standard (4 weeks)
> >
> > Let me know your preference.
> >
> > Thanks,
> > Alice";

// ============================================================================
// CLI Implementation
// ============================================================================

/// mailquote: strip redundant quoted replies from email bodies
#[derive(Parser)]
#[command(name = "mailquote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip quoted content from an email body
    Strip {
        /// Path to the email body (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Lines to keep from each quote block (default: config or MAIL_KEEP_QUOTE_LINES)
        #[arg(short, long)]
        keep_lines: Option<usize>,

        /// Maximum output length in characters, 0 for unlimited
        #[arg(short, long)]
        max_length: Option<usize>,

        /// Print text and metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effect of stripping on a sample reply thread
    Demo,
    /// Initialize mailquote configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

fn read_body(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => {
            let resolved = path_resolver::resolve_path(path)?;
            std::fs::read_to_string(&resolved)
                .with_context(|| format!("Failed to read file: {}", resolved.display()))
        }
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            Ok(body)
        }
    }
}

fn metadata_json(metadata: Option<&StripMetadata>) -> serde_json::Value {
    match metadata {
        Some(meta) => serde_json::json!(meta),
        None => serde_json::json!({}),
    }
}

fn print_summary(metadata: &StripMetadata) {
    println!("Metadata:");
    println!("  Original length: {} chars", metadata.original_length);
    println!("  Stripped length: {} chars", metadata.stripped_length);
    println!("  Reduction: {:.1}%", metadata.reduction_percent());
    println!("  Quote lines kept: {}", metadata.quote_lines_kept);
    println!("  Quote lines stripped: {}", metadata.quote_lines_stripped);
}

fn run_demo() {
    let rule = "=".repeat(80);
    let config = AppConfig::default();

    println!("Original email:");
    println!("{}", rule);
    println!("{}", DEMO_EMAIL);
    println!("\nOriginal length: {} chars", DEMO_EMAIL.chars().count());

    println!("\n{}", rule);
    println!("After quote stripping (keep {} lines):", config.keep_quote_lines());
    println!("{}", rule);
    let StripResult { text, metadata } = config.stripper().strip(DEMO_EMAIL, 0);
    println!("{}", text);

    if let Some(meta) = metadata {
        println!("\n{}", rule);
        print_summary(&meta);
    }

    println!("\n{}", rule);
    println!("After quote stripping with hard limit (500 chars):");
    println!("{}", rule);
    let capped = config.stripper().strip(DEMO_EMAIL, 500);
    println!("{}", capped.text);
    println!("\nFinal length: {} chars", capped.text.chars().count());
    if let Some(meta) = capped.metadata {
        println!("Hard truncated: {}", meta.hard_truncated);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stripped output stays clean on stdout
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Strip {
            input,
            keep_lines,
            max_length,
            json,
        } => {
            let mut config = AppConfig::load()?;
            if let Some(n) = keep_lines {
                config = config.with_keep_quote_lines(n);
            }
            if let Some(n) = max_length {
                config = config.with_max_length(n);
            }
            config.validate()?;

            let body = read_body(input.as_deref())?;
            tracing::info!(
                keep_quote_lines = config.keep_quote_lines(),
                max_length = config.max_length(),
                "Stripping {} chars",
                body.chars().count()
            );

            let result = config.stripper().strip(&body, config.max_length());

            if json {
                let output = serde_json::json!({
                    "text": result.text,
                    "metadata": metadata_json(result.metadata.as_ref()),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", result.text);
                if let Some(meta) = result.metadata {
                    eprintln!(
                        "\nquote lines kept: {}, stripped: {}, length: {} -> {}{}",
                        meta.quote_lines_kept,
                        meta.quote_lines_stripped,
                        meta.original_length,
                        meta.stripped_length,
                        if meta.hard_truncated { " (hard truncated)" } else { "" }
                    );
                }
            }
            Ok(())
        }
        Commands::Demo => {
            run_demo();
            Ok(())
        }
        Commands::Init { force } => {
            let config_dir = path_resolver::get_config_dir();
            let config_path = config_dir.join("config.toml");

            eprintln!("Initializing mailquote configuration...");
            eprintln!("Config directory: {}", config_dir.display());

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
                eprintln!("Created config directory");
            }

            if config_path.exists() && !force {
                eprintln!("Configuration file already exists: {}", config_path.display());
                eprintln!("Use --force to overwrite");
                return Ok(());
            }

            let toml_content = AppConfig::default().to_toml()?;
            std::fs::write(&config_path, &toml_content)?;

            eprintln!("Created configuration file: {}", config_path.display());
            eprintln!("Edit {} to customize settings.", config_path.display());

            Ok(())
        }
    }
}
