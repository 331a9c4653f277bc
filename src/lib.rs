//! # static-caps
//!
//! **Static capability dispatch for Rust.**
//!
//! A capability is a trait with one public operation that forwards to a
//! type-specific implementation method. Calls are resolved at compile time:
//! the capability traits have generic methods, so they are only reachable
//! through generics and every call is monomorphized.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Declaration                                             |
//! |  - capability! (trait + call_<op> + <op>_all helpers)             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - Printable, Scannable                                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Devices & Closed Sets                                   |
//! |  - SimplePrinter, SimpleScanner, PrinterScanner9000               |
//! |  - #[derive(Dispatch)] enums: Printers, Scanners                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use static_caps::prelude::*;
//!
//! let fleet = [Printers::from(SimplePrinter), Printers::from(PrinterScanner9000)];
//!
//! let mut out = String::new();
//! print_all_to(&fleet, &mut out).unwrap();
//! assert_eq!(out, "SimplePrinter\nPrinterScanner9000 PRINT\n");
//! ```

// Re-export paste for the capability! macro
pub use paste;

// =============================================================================
// Modules
// =============================================================================

pub mod syntax_macros;
pub mod sink;
pub mod capability;
pub mod devices;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{
    Printable, Scannable,
    call_print, call_print_to, print_all, print_all_to,
    call_scan, call_scan_to, scan_all, scan_all_to,
};
pub use devices::{SimplePrinter, SimpleScanner, PrinterScanner9000, Printers, Scanners};

// Re-export proc-macros
pub use macros::Dispatch;

/// Common items for static dispatch.
pub mod prelude {
    pub use crate::capability::{
        // Capabilities
        Printable, Scannable,
        // Helpers
        call_print, call_print_to, print_all, print_all_to,
        call_scan, call_scan_to, scan_all, scan_all_to,
    };
    pub use crate::devices::{
        SimplePrinter, SimpleScanner, PrinterScanner9000,
        Printers, Scanners,
    };
    pub use macros::Dispatch;
    // Note: capability! is #[macro_export] so it's at crate root
}
