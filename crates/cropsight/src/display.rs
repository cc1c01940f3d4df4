//! Display formatting utilities for CLI output

use colored::*;

use crate::table::RecordTable;

/// Render the record table as aligned fixed-width columns
pub fn render_table(table: &RecordTable) -> String {
  let headers = table.headers();

  // Column width: widest of header and every cell in that column
  let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
  for record in table.records() {
    for (index, cell) in record.values().iter().enumerate() {
      if index < widths.len() && cell.len() > widths[index] {
        widths[index] = cell.len();
      }
    }
  }

  let mut out = String::new();

  let header_row: Vec<String> = headers
    .iter()
    .enumerate()
    .map(|(index, header)| format!("{:<width$}", header, width = widths[index]))
    .collect();
  out.push_str(&header_row.join("  "));
  out.push('\n');

  let rule_row: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
  out.push_str(&rule_row.join("  "));
  out.push('\n');

  for record in table.records() {
    let cells: Vec<String> = record
      .values()
      .iter()
      .enumerate()
      .map(|(index, cell)| {
        let width = widths.get(index).copied().unwrap_or(cell.len());
        format!("{:<width$}", cell, width = width)
      })
      .collect();
    out.push_str(&cells.join("  "));
    out.push('\n');
  }

  out
}

/// Print the table with a colored record count footer
pub fn print_table(table: &RecordTable) {
  print!("{}", render_table(table));
  println!("{} {} records", "✓".green(), table.len());
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current = String::new();
    for word in paragraph.split_whitespace() {
      if current.is_empty() {
        current = word.to_string();
      } else if current.len() + 1 + word.len() <= width {
        current.push(' ');
        current.push_str(word);
      } else {
        lines.push(std::mem::take(&mut current));
        current = word.to_string();
      }
    }

    if !current.is_empty() {
      lines.push(current);
    }
  }

  lines
}

/// Print an insight (or rendered error message) wrapped for the terminal
pub fn print_insight(text: &str) {
  for line in wrap_text(text, 80) {
    println!("{line}");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wrap_respects_width() {
    let wrapped = wrap_text("one two three four five", 9);
    assert_eq!(wrapped, vec!["one two", "three", "four five"]);
  }

  #[test]
  fn wrap_keeps_paragraph_breaks() {
    let wrapped = wrap_text("first\n\nsecond", 20);
    assert_eq!(wrapped, vec!["first", "", "second"]);
  }

  #[test]
  fn render_table_aligns_columns() {
    let table = RecordTable::parse("ID,Soil_Quality\n1,Loamy\n12,Sandy\n").unwrap();
    let rendered = render_table(&table);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "ID  Soil_Quality");
    assert_eq!(lines[1], "--  ------------");
    assert_eq!(lines[2], "1   Loamy       ");
    assert_eq!(lines[3], "12  Sandy       ");
  }
}
