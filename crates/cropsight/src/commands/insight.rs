use anyhow::Result;
use std::path::Path;

use crate::display;
use crate::groq::GroqClient;
use crate::insight::{format_prompt, generate, lookup};
use crate::loader::Loader;

/// Generate an insight for one land record by ID
pub async fn execute(file: &str, id: i64, raw: bool) -> Result<()> {
  let mut loader = Loader::new();
  let table = loader.load_file(Path::new(file))?;

  if raw {
    match lookup(&table, id) {
      Ok(record) => print!("{}", format_prompt(&record)?),
      Err(err) => println!("{err}"),
    }
    return Ok(());
  }

  let model = GroqClient::from_env();

  almanac::info("Fetching insights...");
  let output = generate(&table, id, &model).await?;

  println!();
  display::print_insight(&output);

  Ok(())
}
