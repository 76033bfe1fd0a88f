use std::io::{self, BufRead, Write};

use crate::schedule::ScheduleEntry;

/// Entries printed between pauses.
pub const PAGE_SIZE: usize = 10;

pub static NO_OPEN_TRUCKS: &str = "There are no food trucks open right now.";

/// Capability to pause at a page boundary until the reader is ready.
///
/// The console front end blocks on a line of stdin; other front ends can
/// substitute a no-op without touching the sorting or paging logic.
pub trait PageAcknowledger {
    fn acknowledge(&mut self) -> io::Result<()>;
}

/// Prompts on stdout and consumes one line of stdin, discarding it.
#[derive(Debug, Default)]
pub struct ConsolePager;

impl PageAcknowledger for ConsolePager {
    fn acknowledge(&mut self) -> io::Result<()> {
        print!("Press any key to continue...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Prints the open entries sorted by vendor name, one `"<name> <address>"`
/// line each, pausing after every full page.
///
/// No pause is requested when a page boundary falls on the final entry, and
/// an empty input prints the fixed no-results line instead.
pub fn present(
    out: &mut impl Write,
    pager: &mut impl PageAcknowledger,
    mut entries: Vec<ScheduleEntry>,
) -> io::Result<()> {
    if entries.is_empty() {
        log::debug!("no entries to present");
        writeln!(out, "{NO_OPEN_TRUCKS}")?;
        return Ok(());
    }

    // Stable, so vendors sharing a name keep their dataset order.
    entries.sort_by(|a, b| a.name().cmp(b.name()));

    let total = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{entry}")?;
        let printed = i + 1;
        if printed % PAGE_SIZE == 0 && printed != total {
            pager.acknowledge()?;
        }
    }
    Ok(())
}
