mod entry;

pub use entry::ScheduleEntry;
