//! Demo driver: one print pass over a mixed fleet, then each scanner scans.

use std::process::ExitCode;

use static_caps::prelude::*;

fn run() -> core::fmt::Result {
    let fleet = vec![Printers::from(SimplePrinter), Printers::from(PrinterScanner9000)];
    print_all(&fleet)?;

    call_scan(&SimpleScanner)?;
    call_scan(&PrinterScanner9000)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
