use clap::{Parser, Subcommand};
use landing_kit::{config, logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landing-kit")]
#[command(about = "Inspect and preview landing page interactivity settings")]
#[command(long_about = "\
Inspect and preview landing page interactivity settings

The browser module reads an optional TOML config that names the selectors,
classes, and tuning values of each feature. This tool generates, checks, and
previews that config without loading a page.

Features:

  menu       collapsible mobile navigation (toggle, Escape, outside click)
  scroll     smooth anchor scrolling below a fixed header
  counters   count-up numbers started when the results section is visible
  carousel   slide track with prev/next and position indicators
  reveal     scroll-reveal groups handed to the external library

Run 'landing-kit gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (stock defaults when absent)
    #[arg(long, default_value = "landing.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock config file with all options documented
    GenConfig,
    /// Validate the config and print the effective settings
    Check,
    /// Preview the text frames of a count-up animation
    Count {
        /// Target value, decoration allowed (e.g. "+1.500", "95%")
        target: String,
        /// Number of evenly spaced frames before the final one
        #[arg(long, default_value_t = 10)]
        frames: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init("info");

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let page = config::load_config(&cli.config)?;
            for line in output::format_config_summary(&page) {
                println!("{}", line);
            }
            println!("==> Config is valid");
        }
        Command::Count { target, frames } => {
            let page = config::load_config(&cli.config)?;
            let value = landing_kit::counter::parse_target(&target)
                .ok_or_else(|| format!("target {target:?} contains no digits"))?;
            let counters = &page.counters;
            for line in
                output::format_count_preview(value, counters.duration_ms, frames, &counters.format())
            {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
