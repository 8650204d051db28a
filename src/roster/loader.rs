//! Roster loading
//!
//! Parses the character CSV: a header row naming the columns, then one row per
//! character with the canonical name in the first column.

use super::{Roster, RosterError};
use crate::core::{AttributeSchema, CharacterRecord};
use std::fs::File;
use std::io;
use std::path::Path;

/// Load a roster from a CSV file
///
/// Malformed rows are skipped with a warning rather than failing the load.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV is unreadable, the
/// header row is missing, or no valid rows remain.
///
/// # Examples
/// ```no_run
/// use inndle::core::AttributeSchema;
/// use inndle::roster::loader::load_from_file;
///
/// let roster = load_from_file("data/characters.csv", AttributeSchema::standard()).unwrap();
/// println!("Loaded {} characters", roster.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, schema: AttributeSchema) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "reading roster");
    from_reader(file, schema)
}

/// Parse a roster from CSV text
///
/// # Errors
///
/// See [`from_reader`].
///
/// # Examples
/// ```
/// use inndle::core::AttributeSchema;
/// use inndle::roster::loader::from_csv_str;
///
/// let csv = "id,Status\nPawn,Alive\nZel Shivertail,Deceased\n";
/// let roster = from_csv_str(csv, AttributeSchema::standard()).unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.get("Pawn").unwrap().first("Status"), Some("Alive"));
/// ```
pub fn from_csv_str(text: &str, schema: AttributeSchema) -> Result<Roster, RosterError> {
    from_reader(text.as_bytes(), schema)
}

/// Parse a roster from any CSV source
///
/// # Errors
///
/// Returns [`RosterError::Csv`] on unreadable CSV, [`RosterError::MissingHeader`]
/// if the header row has no columns, and [`RosterError::EmptyRoster`] if no
/// character row survives validation.
pub fn from_reader<R: io::Read>(reader: R, schema: AttributeSchema) -> Result<Roster, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(RosterError::MissingHeader);
    }

    for attribute in schema.iter() {
        if !headers.iter().skip(1).any(|header| header == attribute.name()) {
            tracing::warn!(
                attribute = attribute.name(),
                "roster has no column for schema attribute; comparisons will fail"
            );
        }
    }

    let mut characters = Vec::new();

    for (line, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Line numbers are 1-based and the header is line 1
        let line = line + 2;

        if row.len() != headers.len() {
            tracing::warn!(
                line,
                expected = headers.len(),
                found = row.len(),
                "skipping roster row with wrong field count"
            );
            continue;
        }

        let name = row.get(0).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            tracing::warn!(line, "skipping roster row without a name");
            continue;
        }

        let mut record = CharacterRecord::new(name);
        for (header, cell) in headers.iter().zip(row.iter()).skip(1) {
            record.insert_raw(header.as_str(), cell);
        }
        characters.push(record);
    }

    let roster = Roster::from_records(schema, characters)?;
    tracing::info!(characters = roster.len(), "roster loaded");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,Gender,Status,Affiliation,Mentions";

    fn parse(rows: &[&str]) -> Result<Roster, RosterError> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        from_csv_str(&text, AttributeSchema::standard())
    }

    #[test]
    fn loads_rows_in_order() {
        let roster = parse(&[
            "Erin Solstice,Female,Alive,The Wandering Inn | Goblinfriend,9800",
            "Zel Shivertail,Male,Deceased,Drake Army,800",
        ])
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Erin Solstice", "Zel Shivertail"]);

        let erin = roster.get("Erin Solstice").unwrap();
        assert_eq!(
            erin.values("Affiliation").unwrap(),
            &["The Wandering Inn".to_string(), "Goblinfriend".to_string()]
        );
        assert_eq!(erin.first("Mentions"), Some("9800"));
    }

    #[test]
    fn quoted_cells_with_commas() {
        let roster = parse(&["\"Flos, King\",Male,Alive,Reim,1300"]).unwrap();
        assert!(roster.get("Flos, King").is_some());
    }

    #[test]
    fn skips_short_rows() {
        let roster = parse(&["Pawn,Male,Alive,Free Antinium,1200", "Broken,Male"]).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.get("Broken").is_none());
    }

    #[test]
    fn skips_nameless_rows() {
        let roster = parse(&[" ,Male,Alive,Nowhere,1", "Pawn,Male,Alive,Free Antinium,1200"]).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn duplicate_names_keep_first() {
        let roster = parse(&[
            "Pawn,Male,Alive,Free Antinium,1200",
            "Pawn,Male,Deceased,Liscor Hive,1",
        ])
        .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("Pawn").unwrap().first("Status"), Some("Alive"));
    }

    #[test]
    fn blank_cell_is_single_empty_value() {
        let roster = parse(&["Teriarch,Male,Alive,,1100"]).unwrap();
        let teriarch = roster.get("Teriarch").unwrap();
        assert_eq!(teriarch.values("Affiliation").unwrap(), &[String::new()]);
    }

    #[test]
    fn header_only_is_empty_roster() {
        assert!(matches!(parse(&[]), Err(RosterError::EmptyRoster)));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(
            from_csv_str("", AttributeSchema::standard()),
            Err(RosterError::MissingHeader)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("does/not/exist.csv", AttributeSchema::standard()),
            Err(RosterError::Io(_))
        ));
    }
}
