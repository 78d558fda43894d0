pub mod compound;
pub mod monthly;
pub mod payload;

pub use compound::compound;
pub use monthly::{load_monthly_changes, MonthlyChange, CHANGE_HEADER, DATE_HEADER};
pub use payload::SipPayload;
