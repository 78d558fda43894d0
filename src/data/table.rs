use csv::ReaderBuilder;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read csv file {path:?}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("column '{0}' not found in header row")]
    FieldNotFound(String),
}

//one parsed csv file: the header row plus the raw string rows, in file order
//row lengths may vary; nothing is validated at this level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { headers, rows }
    }

    //maps each header name to its column position, first occurrence wins
    pub fn header_index(&self) -> IndexMap<&str, usize> {
        let mut index = IndexMap::with_capacity(self.headers.len());
        for (position, name) in self.headers.iter().enumerate() {
            index.entry(name.as_str()).or_insert(position);
        }
        index
    }
}

//reads a csv file into a raw table
//rows the csv reader cannot decode are dropped individually
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RawTable, DataError> {
    let path = path.as_ref();
    let unreadable = |source| DataError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(unreadable)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(_) => continue,
        }
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headers_and_rows_in_file_order() {
        let file = write_csv("Date,Close\n2020-01-01,100.5\n2021-01-01,110.25\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Date", "Close"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["2020-01-01", "100.5"]);
        assert_eq!(table.rows[1], vec!["2021-01-01", "110.25"]);
    }

    #[test]
    fn keeps_short_rows_in_the_raw_table() {
        let file = write_csv("Date,Close\n2020-01-01\n2021-01-01,110.25\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["2020-01-01"]);
    }

    #[test]
    fn header_index_first_occurrence_wins() {
        let table = RawTable::new(
            vec!["Date".to_string(), "Close".to_string(), "Date".to_string()],
            vec![],
        );
        let index = table.header_index();

        assert_eq!(index.get("Date"), Some(&0));
        assert_eq!(index.get("Close"), Some(&1));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let result = read_table("/nonexistent/never-here.csv");
        assert!(matches!(result, Err(DataError::FileUnreadable { .. })));
    }
}
