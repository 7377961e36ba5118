pub mod date;
pub mod duration;
pub mod validation;

pub use date::{format_date, parse_date, parse_optional_date, today, InvalidDate};
pub use duration::{parse_duration, serialize_duration, InvalidDuration};
pub use validation::ValidatedForm;
