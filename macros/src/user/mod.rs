//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Dispatch)]` | on enum | Forward capabilities to the held variant |

mod dispatch;

pub use dispatch::expand_derive_dispatch;
