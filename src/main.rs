use anyhow::Result;
use clap::{Parser, Subcommand};

use painel_cli::cli::months::MonthsArgs;
use painel_cli::cli::show::ShowArgs;
use painel_cli::cli::{handle_months_command, handle_show_command, SourceArgs};
use painel_cli::config::{paths::PainelPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "painel",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "Painel is a terminal dashboard for a personal finance spreadsheet \
                  published as CSV. It downloads the published tab, parses the monthly \
                  figures, and shows summary cards, alerts, and charts for a selected \
                  month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the dashboard for one month
    Show(ShowArgs),

    /// List all months with their key figures
    Months(MonthsArgs),

    /// Store the published CSV link of the sheet
    Init {
        /// Published CSV link (the sheet's API tab)
        #[arg(long)]
        url: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PainelPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui { source }) => {
            painel_cli::tui::run_tui(&settings, &source)?;
        }
        Some(Commands::Show(args)) => {
            handle_show_command(&settings, args)?;
        }
        Some(Commands::Months(args)) => {
            handle_months_command(&settings, args)?;
        }
        Some(Commands::Init { url }) => {
            let mut settings = settings;
            settings.sheet_url = Some(url);
            settings.save(&paths)?;
            println!("Sheet link saved to: {}", paths.settings_file().display());
            println!();
            println!("Run 'painel show' to see the latest month.");
            println!("Run 'painel tui' to launch the interactive dashboard.");
        }
        Some(Commands::Config) => {
            println!("Painel CLI Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!();
            println!("Settings:");
            match &settings.sheet_url {
                Some(url) => println!("  Sheet link: {}", url),
                None => println!("  Sheet link: (not configured; run 'painel init --url <link>')"),
            }
        }
        None => {
            println!("Painel - Terminal-based personal finance dashboard");
            println!();
            println!("Run 'painel --help' for usage information.");
            println!("Run 'painel tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
