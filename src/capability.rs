//! # Capabilities
//!
//! Two independent capabilities, each a trait whose public operation is
//! bound to the concrete type's implementation method at compile time.
//!
//! | Capability | Operation | Implementation method |
//! |------------|-----------|-----------------------|
//! | [`Printable`] | `print` | `print_impl` |
//! | [`Scannable`] | `scan` | `scan_impl` |
//!
//! A type opts in by implementing the trait. Leaving out the implementation
//! method does not build:
//!
//! ```compile_fail
//! use static_caps::Printable;
//!
//! struct Mute;
//!
//! // error[E0046]: missing `print_impl` in implementation
//! impl Printable for Mute {}
//! ```
//!
//! A type may carry any number of capabilities; they share nothing, so there
//! is no common root to inherit from.

crate::capability! {
    /// Types that print a line.
    pub trait Printable {
        fn print => print_impl;
    }
}

crate::capability! {
    /// Types that scan a line.
    pub trait Scannable {
        fn scan => scan_impl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::{self, Write};

    struct Both;

    impl Printable for Both {
        fn print_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
            writeln!(out, "both: print")
        }
    }

    impl Scannable for Both {
        fn scan_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
            writeln!(out, "both: scan")
        }
    }

    #[test]
    fn test_capabilities_do_not_interfere() {
        let mut printed = String::new();
        let mut scanned = String::new();
        call_print_to(&Both, &mut printed).unwrap();
        call_scan_to(&Both, &mut scanned).unwrap();
        assert_eq!(printed, "both: print\n");
        assert_eq!(scanned, "both: scan\n");
    }

    #[test]
    fn test_dyn_sink() {
        let mut out = String::new();
        let sink: &mut dyn Write = &mut out;
        Both.print_to(sink).unwrap();
        assert_eq!(out, "both: print\n");
    }
}
