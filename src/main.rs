//! Command-line front end for kryon-style.
//!
//! Parses colors, box shorthands and inline declarations the same way a
//! Kryon frontend would, and prints their normalised form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kryon_style::{named_colors, parse_color, Declaration, Sides};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kryon-style")]
#[command(about = "Parse and normalise Kryon style values", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse colors and print their canonical form
    Color {
        /// Color strings such as `#f80`, `rgb(1, 2, 3)` or `teal`
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Expand 1, 2 or 4 numbers into a four-sided value
    Sides {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },
    /// List the named colors
    Names {
        /// Only show names containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Apply inline declarations to the layout schema
    Style {
        /// Text such as `margin: 4 8; color: red`
        declaration: String,
    },
}

/// Filter from `RUST_LOG` when it holds valid directives, otherwise from the
/// `-v` count (0=warn, 1=info, 2=debug, 3+=trace).
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    EnvFilter::default().add_directive(level.into())
}

fn init_logging(verbosity: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    fmt()
        .with_env_filter(log_filter(verbosity, rust_log.as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Color { inputs } => {
            for input in &inputs {
                let color = parse_color(input)
                    .with_context(|| format!("Failed to parse color {:?}", input))?;
                println!(
                    "{}\t{}\tr={} g={} b={} a={}",
                    color,
                    color.to_hex8(),
                    color.r(),
                    color.g(),
                    color.b(),
                    color.a()
                );
            }
        }
        Commands::Sides { values } => {
            let sides = Sides::from_slice(&values).context("Failed to build sides")?;
            println!("top:    {}", sides.top());
            println!("right:  {}", sides.right());
            println!("bottom: {}", sides.bottom());
            println!("left:   {}", sides.left());
            println!("shorthand: {}", sides);
        }
        Commands::Names { filter } => {
            let filter = filter.map(|text| text.to_lowercase());
            for (name, color) in named_colors() {
                if filter.as_deref().map_or(true, |text| name.contains(text)) {
                    println!("{:<24}{}", name, color);
                }
            }
        }
        Commands::Style { declaration } => {
            let mut style = Declaration::layout();
            style
                .apply_inline(&declaration)
                .context("Failed to apply declaration")?;
            info!(properties = style.keys().count(), "declaration applied");
            println!("{}", style);
        }
    }

    Ok(())
}
