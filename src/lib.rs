//a Rust-based two-series CSV chart and SIP comparison pipeline

pub mod chart;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod sip;

//prelude module for convenient imports
pub mod prelude {
    pub use crate::chart::{align, sample_payload, ChartError, ChartPayload};
    pub use crate::config::{ChartRequest, FieldMapping};
    pub use crate::data::{
        extract, read_table, resolve_year, DataError, ExtractedSeries, RawTable, SeriesPoint,
        FALLBACK_LABEL,
    };
    pub use crate::pipeline::{chart_from_files, chart_or_sample, sip_from_files, PipelineError};
    pub use crate::sip::{
        compound, load_monthly_changes, MonthlyChange, SipPayload, CHANGE_HEADER, DATE_HEADER,
    };
}
