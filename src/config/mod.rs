pub mod chart_request;
pub mod mapping;

pub use chart_request::ChartRequest;
pub use mapping::FieldMapping;
