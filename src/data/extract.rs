use crate::data::dates::resolve_year;
use crate::data::table::{DataError, RawTable};

//label substituted when date resolution fails on an x-cell
pub const FALLBACK_LABEL: i32 = 1;

//one extracted (label, value) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub label: i32,
    pub value: f64,
}

//extraction output: the surviving points plus a count of dropped rows so
//callers can observe the loss without the extractor raising
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedSeries {
    pub points: Vec<SeriesPoint>,
    pub skipped_rows: usize,
}

impl ExtractedSeries {
    pub fn labels(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.label).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//extracts (label, value) pairs from a raw table under an x/y header mapping
//
//header names are matched exactly against the header row; an absent name
//aborts the whole extraction with FieldNotFound. individual rows are skipped
//(and counted) when they are too short for either resolved column or when
//the y-cell fails to parse as a number. an x-cell that fails date resolution
//keeps its row but takes the fixed fallback label.
pub fn extract(
    table: &RawTable,
    x_header: &str,
    y_header: &str,
) -> Result<ExtractedSeries, DataError> {
    //a file with no header row yields an empty series rather than an error
    if table.headers.is_empty() {
        return Ok(ExtractedSeries::default());
    }

    let index = table.header_index();
    let x_col = *index
        .get(x_header)
        .ok_or_else(|| DataError::FieldNotFound(x_header.to_string()))?;
    let y_col = *index
        .get(y_header)
        .ok_or_else(|| DataError::FieldNotFound(y_header.to_string()))?;
    let widest = x_col.max(y_col);

    let mut points = Vec::with_capacity(table.rows.len());
    let mut skipped_rows = 0;

    for row in &table.rows {
        if row.len() <= widest {
            skipped_rows += 1;
            continue;
        }

        let value = match row[y_col].trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                skipped_rows += 1;
                continue;
            }
        };

        let label = resolve_year(&row[x_col]).unwrap_or(FALLBACK_LABEL);
        points.push(SeriesPoint { label, value });
    }

    Ok(ExtractedSeries {
        points,
        skipped_rows,
    })
}
