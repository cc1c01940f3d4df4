use anyhow::{anyhow, Result};

/// Column names the land datasets are expected to carry
pub mod columns {
  pub const ID: &str = "ID";
  pub const SOIL_QUALITY: &str = "Soil_Quality";
  pub const SEED_VARIETY: &str = "Seed_Variety";
  pub const FERTILIZER_AMOUNT: &str = "Fertilizer_Amount_kg_per_hectare";
  pub const SUNNY_DAYS: &str = "Sunny_Days";
  pub const RAINFALL: &str = "Rainfall_mm";
  pub const IRRIGATION_SCHEDULE: &str = "Irrigation_Schedule";
  pub const YIELD: &str = "Yield_kg_per_hectare";

  /// Columns every dataset should have (YIELD is optional)
  pub const EXPECTED: [&str; 7] = [
    ID,
    SOIL_QUALITY,
    SEED_VARIETY,
    FERTILIZER_AMOUNT,
    SUNNY_DAYS,
    RAINFALL,
    IRRIGATION_SCHEDULE,
  ];
}

/// In-memory land record table: ordered rows of column -> value, parsed
/// once per uploaded file and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
  headers: Vec<String>,
  rows: Vec<Vec<String>>,
}

/// Borrowed view of one row, with lookup by column name
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
  table: &'a RecordTable,
  row: &'a [String],
}

impl RecordTable {
  /// Parse raw CSV content into a record table.
  /// Fails when the content is not valid delimited tabular text; column
  /// presence is deliberately not validated here.
  pub fn parse(content: &str) -> Result<Self> {
    if content.trim().is_empty() {
      return Err(anyhow!("Dataset is empty"));
    }

    let mut reader = csv::ReaderBuilder::new()
      .has_headers(true)
      .trim(csv::Trim::All)
      .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
      .headers()
      .map_err(|e| anyhow!("Failed to read dataset header: {e}"))?
      .iter()
      .map(str::to_string)
      .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
      let record = record.map_err(|e| anyhow!("Failed to parse dataset row: {e}"))?;
      rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Self { headers, rows })
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Position of a column by exact name
  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.headers.iter().position(|header| header == name)
  }

  /// Iterate rows in file order
  pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
    self.rows.iter().map(move |row| Record { table: self, row })
  }

  /// First row whose `ID` cell equals the identifier's decimal form.
  /// Duplicate IDs resolve to the earliest row; a dataset without an
  /// `ID` column matches nothing.
  pub fn find_by_id(&self, id: i64) -> Option<Record<'_>> {
    let index = self.column_index(columns::ID)?;
    let wanted = id.to_string();

    self
      .rows
      .iter()
      .find(|row| row.get(index).map(|cell| cell.trim()) == Some(wanted.as_str()))
      .map(|row| Record { table: self, row })
  }

  /// Expected columns absent from this dataset (advisory, never fatal)
  pub fn missing_expected_columns(&self) -> Vec<&'static str> {
    columns::EXPECTED
      .iter()
      .copied()
      .filter(|name| self.column_index(name).is_none())
      .collect()
  }
}

impl<'a> Record<'a> {
  /// Value of a column for this row, if the column exists
  pub fn get(&self, column: &str) -> Option<&'a str> {
    let index = self.table.column_index(column)?;
    self.row.get(index).map(String::as_str)
  }

  /// Value of a column, or an error naming the missing column
  pub fn require(&self, column: &str) -> Result<&'a str> {
    self.get(column).ok_or_else(|| anyhow!("Dataset has no '{column}' column"))
  }

  /// Cells in header order
  pub fn values(&self) -> &'a [String] {
    self.row
  }
}
