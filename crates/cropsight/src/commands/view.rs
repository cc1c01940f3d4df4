use anyhow::Result;
use std::path::Path;

use crate::display;
use crate::loader::Loader;

/// Load a dataset and render it as a table
pub fn execute(file: &str) -> Result<()> {
  let mut loader = Loader::new();
  let table = loader.load_file(Path::new(file))?;

  almanac::success("Dataset loaded successfully!");

  let missing = table.missing_expected_columns();
  if !missing.is_empty() {
    almanac::warn(&format!("Dataset is missing expected columns: {}", missing.join(", ")));
  }

  display::print_table(&table);

  Ok(())
}
