use crate::chart::{align, sample_payload, ChartError, ChartPayload};
use crate::config::{ChartRequest, FieldMapping};
use crate::data::{extract, read_table, DataError};
use crate::sip::{compound, load_monthly_changes, SipPayload};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

//runs extractor then aligner over a file pair under a field mapping
//an unreadable file or an absent header aborts that file's extraction and
//surfaces as a pipeline error for the caller to translate
pub fn chart_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
    file1: P,
    file2: Q,
    mapping: &FieldMapping,
) -> Result<ChartPayload, PipelineError> {
    let table1 = read_table(file1)?;
    let series1 = extract(&table1, &mapping.x1, &mapping.y1)?;

    let table2 = read_table(file2)?;
    let series2 = extract(&table2, &mapping.x2, &mapping.y2)?;

    let payload = align(&series1.points, &series2.values(), mapping)?;
    Ok(payload)
}

//the boundary contract with the presentation layer: any failure inside the
//pipeline is converted to the default sample payload, never surfaced
pub fn chart_or_sample(request: &ChartRequest) -> ChartPayload {
    chart_from_files(&request.file1, &request.file2, &request.mapping)
        .unwrap_or_else(|_| sample_payload())
}

//loads two monthly-change files and runs the sip recurrence over them
#[allow(clippy::too_many_arguments)]
pub fn sip_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
    file1: P,
    file2: Q,
    contribution: f64,
    at_period_start: bool,
    date_header: &str,
    change_header: &str,
    mapping: &FieldMapping,
) -> Result<SipPayload, PipelineError> {
    let changes1 = load_monthly_changes(file1, date_header, change_header)?;
    let changes2 = load_monthly_changes(file2, date_header, change_header)?;

    let (labels, values1, values2) = compound(&changes1, &changes2, contribution, at_period_start);
    if labels.is_empty() {
        return Err(ChartError::NoUsableData.into());
    }

    Ok(SipPayload {
        labels,
        dataset1: values1,
        dataset2: values2,
        dataset1_name: mapping.display_name1().to_string(),
        dataset2_name: mapping.display_name2().to_string(),
        color1: mapping.display_color1().to_string(),
        color2: mapping.display_color2().to_string(),
    })
}
