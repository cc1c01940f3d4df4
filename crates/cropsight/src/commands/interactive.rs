use anyhow::{Context, Result};
use dialoguer::Input;
use std::path::Path;

use crate::display;
use crate::groq::GroqClient;
use crate::insight::generate;
use crate::loader::Loader;

/// Load a dataset once, then answer insight requests until blank input.
/// Each round goes back through the loader, so re-renders of the same
/// content hit the cache instead of the parser.
pub async fn execute(file: &str) -> Result<()> {
  let path = Path::new(file);
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

  let mut loader = Loader::new();
  let model = GroqClient::from_env();

  let table = loader.load(&content)?;
  almanac::success(&format!("Dataset loaded: {} records", table.len()));
  println!("Enter a land ID for insights; leave blank to exit.");

  loop {
    let entry: String =
      Input::new().with_prompt("Land ID").allow_empty(true).interact_text()?;
    let entry = entry.trim();

    if entry.is_empty() {
      break;
    }

    let id: i64 = match entry.parse() {
      Ok(id) => id,
      Err(_) => {
        almanac::warn("Please enter a whole-number land ID");
        continue;
      }
    };

    let table = loader.load(&content)?;

    almanac::info("Fetching insights...");
    let output = generate(&table, id, &model).await?;

    println!();
    display::print_insight(&output);
    println!();
  }

  Ok(())
}
