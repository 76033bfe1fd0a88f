#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod parse;
mod present;
mod schedule;

use std::io;
use std::process::ExitCode;

use chrono::Local;

use crate::present::ConsolePager;
use crate::schedule::ScheduleEntry;

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();

    let client = fetch::make_client();
    let records = match fetch::schedule(&client).await {
        Ok(records) => records,
        Err(e) => {
            log::error!("loading the schedule dataset failed: {e}");
            println!("An error occurred loading food truck data. Program will now exit.");
            return ExitCode::FAILURE;
        }
    };

    let mut rejected = 0usize;
    let entries: Vec<ScheduleEntry> = records
        .into_iter()
        .filter_map(|raw| match ScheduleEntry::from_raw(raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("skipping malformed record: {e}");
                rejected += 1;
                None
            }
        })
        .collect();
    if rejected > 0 {
        log::info!("skipped {rejected} malformed records");
    }

    let now = Local::now().naive_local();
    println!("The current time is {}.", now.format("%A %H:%M"));

    let open: Vec<ScheduleEntry> = entries
        .into_iter()
        .filter(|entry| entry.is_open_at(now))
        .collect();
    log::info!("{} entries are open right now", open.len());

    let mut stdout = io::stdout().lock();
    if let Err(e) = present::present(&mut stdout, &mut ConsolePager, open) {
        log::error!("writing results to the console failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
