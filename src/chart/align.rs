use crate::chart::payload::ChartPayload;
use crate::config::FieldMapping;
use crate::data::SeriesPoint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no usable data: zero overlapping rows after truncation")]
    NoUsableData,
}

//packages the two extracted series into a chart-ready payload
//
//only series 1 contributes labels; series 2 contributes values only, its own
//x-column having been discarded upstream. labels and both datasets are
//truncated to the shorter series so the payload stays positionally aligned.
//a zero-length overlap is a failure, not an empty payload; the caller must
//fall back to sample data.
pub fn align(
    series1: &[SeriesPoint],
    series2_values: &[f64],
    mapping: &FieldMapping,
) -> Result<ChartPayload, ChartError> {
    let len = series1.len().min(series2_values.len());
    if len == 0 {
        return Err(ChartError::NoUsableData);
    }

    Ok(ChartPayload {
        labels: series1[..len].iter().map(|p| p.label).collect(),
        dataset1: series1[..len].iter().map(|p| p.value).collect(),
        dataset2: series2_values[..len].to_vec(),
        dataset1_name: mapping.display_name1().to_string(),
        dataset2_name: mapping.display_name2().to_string(),
        color1: mapping.display_color1().to_string(),
        color2: mapping.display_color2().to_string(),
    })
}
