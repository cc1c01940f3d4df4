use anyhow::Result;
use thiserror::Error;

use crate::groq::CompletionModel;
use crate::table::{columns, Record, RecordTable};

/// Persona instruction sent as the system message on every request
pub const SYSTEM_PROMPT: &str = "You are an expert in agricultural yield prediction.";

/// The two failure kinds of the insight pipeline. Both render to the
/// fixed user-facing message shape via `Display`, so callers collapse
/// them into the same output channel as a successful insight.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InsightError {
  #[error("**❌ Error:** ID {id} not found in the dataset.")]
  NotFound { id: i64 },

  #[error("**❌ Error generating insights:** {reason}")]
  RequestFailure { reason: String },
}

impl InsightError {
  pub fn not_found(id: i64) -> Self {
    Self::NotFound { id }
  }

  pub fn request_failure(reason: impl Into<String>) -> Self {
    Self::RequestFailure { reason: reason.into() }
  }
}

/// Select the record matching the identifier, first match wins
pub fn lookup(table: &RecordTable, id: i64) -> Result<Record<'_>, InsightError> {
  table.find_by_id(id).ok_or(InsightError::NotFound { id })
}

/// Render the fixed-order prompt block for one land record.
/// Field values are taken verbatim from the table; a dataset missing one
/// of the six columns fails here and propagates as a command error.
pub fn format_prompt(record: &Record<'_>) -> Result<String> {
  Ok(format!(
    "Provide insights for the following land:\n\
     - Soil Quality: {}\n\
     - Seed Variety: {}\n\
     - Fertilizer Amount: {} kg/hectare\n\
     - Sunny Days: {}\n\
     - Rainfall: {} mm\n\
     - Irrigation Schedule: {}\n",
    record.require(columns::SOIL_QUALITY)?,
    record.require(columns::SEED_VARIETY)?,
    record.require(columns::FERTILIZER_AMOUNT)?,
    record.require(columns::SUNNY_DAYS)?,
    record.require(columns::RAINFALL)?,
    record.require(columns::IRRIGATION_SCHEDULE)?,
  ))
}

/// Run the full pipeline for one identifier: lookup, prompt, request,
/// yield annotation. Both error kinds come back as their rendered
/// message in the same `String` channel as success, keeping the display
/// path uniform.
pub async fn generate(
  table: &RecordTable,
  id: i64,
  model: &dyn CompletionModel,
) -> Result<String> {
  let record = match lookup(table, id) {
    Ok(record) => record,
    Err(err) => return Ok(err.to_string()),
  };

  let prompt = format_prompt(&record)?;

  let text = match model.complete(SYSTEM_PROMPT, &prompt).await {
    Ok(text) => text,
    Err(err) => return Ok(InsightError::request_failure(format!("{err:#}")).to_string()),
  };

  Ok(append_yield(text, &record))
}

/// Suffix the predicted yield when the record carries a non-empty value
fn append_yield(text: String, record: &Record<'_>) -> String {
  match record.get(columns::YIELD).map(str::trim) {
    Some(value) if !value.is_empty() => {
      format!("{text}\n\n**🌾 Predicted Yield:** {value} kg/hectare.")
    }
    _ => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ONE_ROW: &str = "ID,Soil_Quality,Seed_Variety,Fertilizer_Amount_kg_per_hectare,Sunny_Days,Rainfall_mm,Irrigation_Schedule\n7,Clay,Heirloom,35,98,450,Biweekly\n";

  #[test]
  fn not_found_renders_fixed_message() {
    let err = InsightError::not_found(42);
    assert_eq!(err.to_string(), "**❌ Error:** ID 42 not found in the dataset.");
  }

  #[test]
  fn request_failure_renders_fixed_message() {
    let err = InsightError::request_failure("connection refused");
    assert_eq!(
      err.to_string(),
      "**❌ Error generating insights:** connection refused"
    );
  }

  #[test]
  fn prompt_block_is_fixed_order() {
    let table = RecordTable::parse(ONE_ROW).unwrap();
    let record = lookup(&table, 7).unwrap();
    let prompt = format_prompt(&record).unwrap();

    assert_eq!(
      prompt,
      "Provide insights for the following land:\n\
       - Soil Quality: Clay\n\
       - Seed Variety: Heirloom\n\
       - Fertilizer Amount: 35 kg/hectare\n\
       - Sunny Days: 98\n\
       - Rainfall: 450 mm\n\
       - Irrigation Schedule: Biweekly\n"
    );
  }

  #[test]
  fn prompt_fails_on_missing_column() {
    let table = RecordTable::parse("ID,Soil_Quality\n7,Clay\n").unwrap();
    let record = lookup(&table, 7).unwrap();

    let err = format_prompt(&record).unwrap_err();
    assert!(err.to_string().contains("Seed_Variety"));
  }
}
