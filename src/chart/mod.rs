pub mod align;
pub mod payload;
pub mod sample;

pub use align::{align, ChartError};
pub use payload::ChartPayload;
pub use sample::sample_payload;
