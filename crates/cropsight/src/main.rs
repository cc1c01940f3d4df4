use anyhow::Result;
use clap::{Parser, Subcommand};
use cropsight::commands;

#[derive(Parser)]
#[command(name = "cropsight")]
#[command(
  about = "Cropsight - Agricultural Insights and Yield Prediction\nLoad your land records, browse the table, and get model-generated insights per land ID"
)]
#[command(version)]
#[command(after_help = "Powered by Groq (https://groq.com)")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Load a dataset and display it as a table
  View {
    /// Path to a CSV file of land and agricultural records
    file: String,
  },
  /// Generate insights for a single land record
  Insight {
    /// Path to a CSV file of land and agricultural records
    file: String,
    /// ID of the land record
    id: i64,
    /// Print the formatted prompt instead of calling the model
    #[arg(long)]
    raw: bool,
  },
  /// Load a dataset once and request insights interactively
  Interactive {
    /// Path to a CSV file of land and agricultural records
    file: String,
  },
}

async fn handle(command: Command) -> Result<()> {
  match command {
    Command::View { file } => commands::view::execute(&file),
    Command::Insight { file, id, raw } => commands::insight::execute(&file, id, raw).await,
    Command::Interactive { file } => commands::interactive::execute(&file).await,
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  handle(cli.command).await?;
  Ok(())
}
