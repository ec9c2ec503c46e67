pub mod error;
pub mod observation;
pub mod region;

pub use error::{ModelError, Result};
pub use observation::{CLEANED_COLUMNS, CleanedRecord, Observation};
pub use region::Region;
