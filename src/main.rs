use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use seasoncli::{cli, config, error, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Announce new season premieres (run this from cron)
    Check(CheckOptions),

    /// List season premieres inside the window without sending anything
    Upcoming(UpcomingOptions),

    /// List seasons that were already announced
    Alerts,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckOptions {
    /// Look this many days ahead instead of DAYS_AHEAD
    #[clap(long)]
    pub days_ahead: Option<u32>,

    /// Print what would be sent without sending or recording
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct UpcomingOptions {
    /// Look this many days ahead instead of DAYS_AHEAD
    #[clap(long)]
    pub days_ahead: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    if let Command::Alerts = cli.command {
        cli::alerts(config::alert_log_file()).await;
        return;
    }

    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match cli.command {
        Command::Check(opt) => {
            cli::check(&settings.with_days_ahead(opt.days_ahead), opt.dry_run).await
        }
        Command::Upcoming(opt) => cli::upcoming(&settings.with_days_ahead(opt.days_ahead)).await,
        Command::Alerts | Command::Completions(_) => {}
    }
}
