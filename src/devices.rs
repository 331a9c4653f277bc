//! Concrete devices and the closed sets they are grouped into.
//!
//! Each device is a stateless value type. Its label constants are the exact
//! text (without line terminator) its capability operations emit.
//!
//! [`Printers`] and [`Scanners`] are closed sets: the variant list is the
//! whole universe, and dispatch over it is an exhaustive `match` generated by
//! [`Dispatch`](crate::Dispatch). A payload that lacks the capability is
//! rejected when the crate is built:
//!
//! ```compile_fail
//! use static_caps::{Dispatch, Printable, SimpleScanner};
//!
//! #[derive(Dispatch)]
//! #[dispatch(Printable::print_impl)]
//! enum Mixed {
//!     Scanner(SimpleScanner),
//! }
//! ```

use core::fmt::{self, Write};

use crate::capability::{Printable, Scannable};
use macros::Dispatch;

// =============================================================================
// Devices
// =============================================================================

/// Prints only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimplePrinter;

impl SimplePrinter {
    pub const PRINT_LABEL: &'static str = "SimplePrinter";
}

impl Printable for SimplePrinter {
    fn print_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::PRINT_LABEL)
    }
}

/// Scans only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SimpleScanner;

impl SimpleScanner {
    pub const SCAN_LABEL: &'static str = "SimpleScanner";
}

impl Scannable for SimpleScanner {
    fn scan_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::SCAN_LABEL)
    }
}

/// Prints and scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PrinterScanner9000;

impl PrinterScanner9000 {
    pub const PRINT_LABEL: &'static str = "PrinterScanner9000 PRINT";
    pub const SCAN_LABEL: &'static str = "PrinterScanner9000 SCAN";
}

impl Printable for PrinterScanner9000 {
    fn print_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::PRINT_LABEL)
    }
}

impl Scannable for PrinterScanner9000 {
    fn scan_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::SCAN_LABEL)
    }
}

// =============================================================================
// Closed Sets
// =============================================================================

/// Every device that can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Dispatch)]
#[dispatch(Printable::print_impl)]
pub enum Printers {
    SimplePrinter(SimplePrinter),
    PrinterScanner9000(PrinterScanner9000),
}

/// Every device that can scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Dispatch)]
#[dispatch(Scannable::scan_impl)]
pub enum Scanners {
    SimpleScanner(SimpleScanner),
    PrinterScanner9000(PrinterScanner9000),
}
