use crate::data::{read_table, DataError};
use std::path::Path;

//default column names for market-data monthly exports
pub const DATE_HEADER: &str = "Date";
pub const CHANGE_HEADER: &str = "Change %";

//one month of a percentage-return series: the raw date string and the
//fractional change for that month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyChange {
    pub date: String,
    pub change: f64,
}

//loads a monthly-change csv into oldest-first order
//
//files are assumed newest-first on disk, so the parsed rows are reversed.
//change cells hold percent figures, optionally with a trailing percent sign,
//and are converted to fractional returns. rows that fail to parse are
//dropped individually.
pub fn load_monthly_changes<P: AsRef<Path>>(
    path: P,
    date_header: &str,
    change_header: &str,
) -> Result<Vec<MonthlyChange>, DataError> {
    let table = read_table(path)?;
    if table.headers.is_empty() {
        return Ok(Vec::new());
    }

    let index = table.header_index();
    let date_col = *index
        .get(date_header)
        .ok_or_else(|| DataError::FieldNotFound(date_header.to_string()))?;
    let change_col = *index
        .get(change_header)
        .ok_or_else(|| DataError::FieldNotFound(change_header.to_string()))?;
    let widest = date_col.max(change_col);

    let mut changes = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        if row.len() <= widest {
            continue;
        }

        let cell = row[change_col].trim().trim_end_matches('%').trim();
        let percent = match cell.parse::<f64>() {
            Ok(percent) => percent,
            Err(_) => continue,
        };

        changes.push(MonthlyChange {
            date: row[date_col].clone(),
            change: percent / 100.0,
        });
    }

    changes.reverse();
    Ok(changes)
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
    fn reverses_newest_first_input_to_oldest_first() {
        let file = write_csv("Date,Change %\n3/1/2024,1.00%\n2/1/2024,2.00%\n1/1/2024,3.00%\n");
        let changes = load_monthly_changes(file.path(), DATE_HEADER, CHANGE_HEADER).unwrap();

        let dates: Vec<&str> = changes.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, vec!["1/1/2024", "2/1/2024", "3/1/2024"]);
    }

    #[test]
    fn percent_cells_become_fractions() {
        let file = write_csv("Date,Change %\n1/1/2024,2.53%\n");
        let changes = load_monthly_changes(file.path(), DATE_HEADER, CHANGE_HEADER).unwrap();

        assert_eq!(changes.len(), 1);
        assert!((changes[0].change - 0.0253).abs() < 1e-12);
    }

    #[test]
    fn bare_numbers_and_negatives_also_parse() {
        let file = write_csv("Date,Change %\n2/1/2024,-1.5\n1/1/2024,0.75\n");
        let changes = load_monthly_changes(file.path(), DATE_HEADER, CHANGE_HEADER).unwrap();

        assert!((changes[0].change - 0.0075).abs() < 1e-12);
        assert!((changes[1].change + 0.015).abs() < 1e-12);
    }

    #[test]
    fn unparsable_rows_are_dropped() {
        let file = write_csv("Date,Change %\n2/1/2024,n/a\n1/1/2024,1.00%\n");
        let changes = load_monthly_changes(file.path(), DATE_HEADER, CHANGE_HEADER).unwrap();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].date, "1/1/2024");
    }

    #[test]
    fn missing_change_column_aborts_the_load() {
        let file = write_csv("Date,Price\n1/1/2024,100\n");
        let result = load_monthly_changes(file.path(), DATE_HEADER, CHANGE_HEADER);

        assert!(matches!(result, Err(DataError::FieldNotFound(name)) if name == CHANGE_HEADER));
    }
}
