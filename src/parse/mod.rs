mod error;
mod record;
mod time;

pub use error::Error;
pub use error::Result;
pub use record::RawRecord;
pub use time::clock_time;
pub use time::weekday;
