//! `#[derive(Dispatch)]`: exhaustive variant dispatch for closed sets
//!
//! ```ignore
//! #[derive(Dispatch)]
//! #[dispatch(Printable::print_impl)]
//! enum Printers {
//!     SimplePrinter(SimplePrinter),
//!     PrinterScanner9000(PrinterScanner9000),
//! }
//! ```
//!
//! Generates, per listed capability:
//!
//! ```ignore
//! impl Printable for Printers {
//!     fn print_impl<__W: ::core::fmt::Write + ?Sized>(&self, out: &mut __W) -> ::core::fmt::Result {
//!         match self {
//!             Self::SimplePrinter(inner) => Printable::print_impl(inner, out),
//!             Self::PrinterScanner9000(inner) => Printable::print_impl(inner, out),
//!         }
//!     }
//! }
//! ```
//!
//! plus one `From<Payload>` impl per variant when the enum has no type
//! parameters. Payload types held by more than one variant are skipped.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, Type};

use crate::common::{collect_dispatch_targets, DispatchTarget};

/// A single-field tuple variant: `Name(Payload)`.
struct Arm<'a> {
    variant: &'a Ident,
    payload: &'a Type,
}

pub fn expand_derive_dispatch(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Dispatch)] only supports enums",
        ));
    };

    let targets = collect_dispatch_targets(&input.attrs)?;
    if targets.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing #[dispatch(Trait::impl_method, ...)] attribute",
        ));
    }

    let arms = collect_arms(data)?;

    let impls = targets.iter().map(|target| expand_capability_impl(input, &arms, target));
    // `From<T>` for a type parameter could overlap with other payloads.
    let froms: Vec<TokenStream2> = if input.generics.type_params().next().is_none() {
        arms.iter()
            .filter(|arm| is_unique_payload(&arms, arm))
            .map(|arm| expand_from_impl(input, arm))
            .collect()
    } else {
        Vec::new()
    };

    Ok(quote! {
        #(#impls)*
        #(#froms)*
    })
}

fn collect_arms(data: &DataEnum) -> syn::Result<Vec<Arm<'_>>> {
    data.variants
        .iter()
        .map(|variant| match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Arm {
                variant: &variant.ident,
                payload: &fields.unnamed[0].ty,
            }),
            _ => Err(syn::Error::new_spanned(
                variant,
                "each variant must hold exactly one value, e.g. `Name(Payload)`",
            )),
        })
        .collect()
}

/// A payload shared by several variants gets no `From` impl.
fn is_unique_payload(arms: &[Arm<'_>], arm: &Arm<'_>) -> bool {
    arms.iter().filter(|other| other.payload == arm.payload).count() == 1
}

fn expand_capability_impl(input: &DeriveInput, arms: &[Arm<'_>], target: &DispatchTarget) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let DispatchTarget { trait_path, method } = target;

    // An uninhabited enum has nothing to forward to.
    let body = if arms.is_empty() {
        quote! {
            let _ = out;
            match *self {}
        }
    } else {
        let cases = arms.iter().map(|Arm { variant, .. }| {
            quote! { Self::#variant(inner) => #trait_path::#method(inner, out), }
        });
        quote! { match self { #(#cases)* } }
    };

    quote! {
        impl #impl_generics #trait_path for #name #ty_generics #where_clause {
            #[inline(always)]
            fn #method<__W: ::core::fmt::Write + ?Sized>(&self, out: &mut __W) -> ::core::fmt::Result {
                #body
            }
        }
    }
}

fn expand_from_impl(input: &DeriveInput, arm: &Arm<'_>) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let Arm { variant, payload } = arm;

    quote! {
        impl #impl_generics ::core::convert::From<#payload> for #name #ty_generics #where_clause {
            #[inline]
            fn from(value: #payload) -> Self {
                Self::#variant(value)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> syn::File {
        let tokens = try_expand(&input).unwrap();
        syn::parse2(tokens).unwrap()
    }

    fn trait_names(file: &syn::File) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Impl(imp) => imp.trait_.as_ref(),
                _ => None,
            })
            .filter_map(|(_, path, _)| path.segments.last())
            .map(|seg| seg.ident.to_string())
            .collect()
    }

    #[test]
    fn test_one_impl_per_capability_and_variant() {
        let file = expand(syn::parse_quote! {
            #[dispatch(Printable::print_impl, Scannable::scan_impl)]
            enum Combo {
                A(A),
                B(B),
            }
        });
        assert_eq!(trait_names(&file), ["Printable", "Scannable", "From", "From"]);
    }

    #[test]
    fn test_generated_method_matches_every_variant() {
        let file = expand(syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Printers {
                SimplePrinter(SimplePrinter),
                PrinterScanner9000(PrinterScanner9000),
                Other(Other),
            }
        });
        let syn::Item::Impl(imp) = &file.items[0] else {
            panic!("expected impl block");
        };
        let syn::ImplItem::Fn(method) = &imp.items[0] else {
            panic!("expected method");
        };
        assert_eq!(method.sig.ident, "print_impl");
        let Some(syn::Stmt::Expr(syn::Expr::Match(m), _)) = method.block.stmts.first() else {
            panic!("expected match body");
        };
        assert_eq!(m.arms.len(), 3);
    }

    #[test]
    fn test_empty_enum_is_accepted() {
        let file = expand(syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Nothing {}
        });
        assert_eq!(trait_names(&file), ["Printable"]);
    }

    #[test]
    fn test_generics_are_kept() {
        let file = expand(syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Wrap<T: Printable> {
                Inner(T),
            }
        });
        let syn::Item::Impl(imp) = &file.items[0] else {
            panic!("expected impl block");
        };
        assert_eq!(imp.generics.params.len(), 1);
        assert_eq!(trait_names(&file), ["Printable"]);
    }

    #[test]
    fn test_shared_payload_gets_no_from() {
        let file = expand(syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Pool {
                Left(SimplePrinter),
                Right(SimplePrinter),
                Combo(PrinterScanner9000),
            }
        });
        // The `From` impl's argument is the last segment of its trait path: `From<Payload>`.
        let froms: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Impl(imp) => imp.trait_.as_ref(),
                _ => None,
            })
            .filter_map(|(_, path, _)| path.segments.last())
            .filter(|seg| seg.ident == "From")
            .filter_map(|seg| match &seg.arguments {
                syn::PathArguments::AngleBracketed(args) => args.args.first(),
                _ => None,
            })
            .filter_map(|arg| match arg {
                syn::GenericArgument::Type(syn::Type::Path(tp)) => tp.path.segments.last(),
                _ => None,
            })
            .map(|seg| seg.ident.to_string())
            .collect();
        assert_eq!(froms, ["PrinterScanner9000"]);
        assert_eq!(trait_names(&file), ["Printable", "From"]);
    }

    #[test]
    fn test_rejects_struct() {
        let input: DeriveInput = syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            struct NotAnEnum;
        };
        assert!(try_expand(&input).is_err());
    }

    #[test]
    fn test_rejects_missing_attribute() {
        let input: DeriveInput = syn::parse_quote! {
            enum Printers { A(A) }
        };
        assert!(try_expand(&input).is_err());
    }

    #[test]
    fn test_rejects_non_tuple_variants() {
        let unit: DeriveInput = syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Printers { A }
        };
        assert!(try_expand(&unit).is_err());

        let named: DeriveInput = syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Printers { A { inner: A } }
        };
        assert!(try_expand(&named).is_err());

        let pair: DeriveInput = syn::parse_quote! {
            #[dispatch(Printable::print_impl)]
            enum Printers { A(A, B) }
        };
        assert!(try_expand(&pair).is_err());
    }
}
