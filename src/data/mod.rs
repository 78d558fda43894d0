pub mod dates;
pub mod extract;
pub mod table;

pub use dates::resolve_year;
pub use extract::{extract, ExtractedSeries, SeriesPoint, FALLBACK_LABEL};
pub use table::{read_table, DataError, RawTable};
