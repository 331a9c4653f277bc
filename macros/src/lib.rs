//! Procedural macros for the static-caps capability system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Dispatch)]` | enum | Exhaustive capability dispatch over a closed set |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive capability impls for a closed-set enum.
///
/// Every variant must hold exactly one value. For each `Trait::impl_method`
/// listed in `#[dispatch(...)]`, the enum implements `Trait` by matching on
/// itself and forwarding `impl_method` to the held value. A `From` impl is
/// generated for every payload type held by exactly one variant; enums with
/// type parameters get no `From` impls.
///
/// # Usage
/// ```ignore
/// #[derive(Dispatch)]
/// #[dispatch(Printable::print_impl, Scannable::scan_impl)]
/// enum Combos {
///     Small(PrinterScanner9000),
///     Large(PrinterScanner9001),
/// }
///
/// let device = Combos::from(PrinterScanner9000);
/// device.print()?;
/// ```
///
/// A payload that does not implement a listed trait is a compile error at
/// the forwarding call.
#[proc_macro_derive(Dispatch, attributes(dispatch))]
pub fn derive_dispatch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_dispatch(input).into()
}
