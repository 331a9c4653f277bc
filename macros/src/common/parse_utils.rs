//! Common parsing utilities

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Ident, Path, PathSegment, Token,
};

// =============================================================================
// Dispatch Target: `Trait::impl_method`
// =============================================================================

/// One capability to forward: `path::to::Trait::impl_method`.
pub struct DispatchTarget {
    pub trait_path: Path,
    pub method: Ident,
}

impl Parse for DispatchTarget {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: Path = input.parse()?;
        split_method(path)
    }
}

/// Split `A::B::method` into (`A::B`, `method`).
fn split_method(path: Path) -> syn::Result<DispatchTarget> {
    let count = path.segments.len();
    let Some(last) = path.segments.last().filter(|_| count >= 2) else {
        return Err(syn::Error::new_spanned(
            &path,
            "expected `Trait::impl_method`, e.g. `Printable::print_impl`",
        ));
    };
    if !last.arguments.is_empty() {
        return Err(syn::Error::new_spanned(
            last,
            "the implementation method takes no generic arguments here",
        ));
    }
    let method = last.ident.clone();

    let segments: Punctuated<PathSegment, Token![::]> =
        path.segments.iter().take(count - 1).cloned().collect();

    Ok(DispatchTarget {
        trait_path: Path { leading_colon: path.leading_colon, segments },
        method,
    })
}

// =============================================================================
// Attribute Collection
// =============================================================================

/// Collect every target from all `#[dispatch(...)]` attributes.
///
/// The attribute may be repeated; order is preserved.
pub fn collect_dispatch_targets(attrs: &[Attribute]) -> syn::Result<Vec<DispatchTarget>> {
    let mut targets = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("dispatch")) {
        let list = attr.parse_args_with(Punctuated::<DispatchTarget, Token![,]>::parse_terminated)?;
        targets.extend(list);
    }
    Ok(targets)
}
