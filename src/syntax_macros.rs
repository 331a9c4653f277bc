//! Capability Declaration Macro
//!
//! `capability!` turns a one-line declaration into a complete static
//! capability: the trait, its forwarding operations and the generic helpers
//! that drive it.

// =============================================================================
// capability! - Declare a statically dispatched capability
// =============================================================================

/// Declare a capability trait together with its uniform helpers.
///
/// ```ignore
/// capability! {
///     /// Types that can print.
///     pub trait Printable {
///         fn print => print_impl;
///     }
/// }
/// ```
///
/// Expands to:
///
/// | Item | Kind | Purpose |
/// |------|------|---------|
/// | `Printable::print_impl` | required method | per-type behavior, writes into a sink |
/// | `Printable::print_to` | provided method | forwards to `print_impl` for any sink |
/// | `Printable::print` | provided method | forwards to `print_impl` on stdout |
/// | `call_print` / `call_print_to` | fn | generic entry point for any `T: Printable` |
/// | `print_all` / `print_all_to` | fn | ordered pass over a collection |
///
/// The generated trait has generic methods, so it can only be used through
/// generics. Every call site is monomorphized; there is no vtable.
#[macro_export]
macro_rules! capability {
    (
        $(#[$meta:meta])*
        $vis:vis trait $Cap:ident {
            fn $op:ident => $op_impl:ident;
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            $vis trait $Cap {
                #[doc = "Write this type's `" $op "` line into `out`."]
                fn $op_impl<W: ::core::fmt::Write + ?Sized>(&self, out: &mut W) -> ::core::fmt::Result;

                #[doc = "Run `" $op "` into an arbitrary sink."]
                #[inline(always)]
                fn [<$op _to>]<W: ::core::fmt::Write + ?Sized>(&self, out: &mut W) -> ::core::fmt::Result {
                    self.$op_impl(out)
                }

                #[doc = "Run `" $op "` on standard output."]
                #[inline]
                fn $op(&self) -> ::core::fmt::Result {
                    self.$op_impl(&mut $crate::sink::Stdout::lock())
                }
            }

            #[doc = "Invoke `" $op "` on any [`" $Cap "`] type."]
            #[inline]
            $vis fn [<call_ $op>]<T: $Cap + ?Sized>(obj: &T) -> ::core::fmt::Result {
                obj.$op()
            }

            #[doc = "Invoke `" $op "` on any [`" $Cap "`] type, writing into `out`."]
            #[inline]
            $vis fn [<call_ $op _to>]<T, W>(obj: &T, out: &mut W) -> ::core::fmt::Result
            where
                T: $Cap + ?Sized,
                W: ::core::fmt::Write + ?Sized,
            {
                obj.[<$op _to>](out)
            }

            #[doc = "Run `" $op "` on every item in order, on standard output."]
            $vis fn [<$op _all>]<'a, T, I>(items: I) -> ::core::fmt::Result
            where
                T: $Cap + 'a,
                I: ::core::iter::IntoIterator<Item = &'a T>,
            {
                [<$op _all_to>](items, &mut $crate::sink::Stdout::lock())
            }

            #[doc = "Run `" $op "` on every item in order, writing into `out`."]
            #[doc = ""]
            #[doc = "Stops at the first failed write."]
            $vis fn [<$op _all_to>]<'a, T, I, W>(items: I, out: &mut W) -> ::core::fmt::Result
            where
                T: $Cap + 'a,
                I: ::core::iter::IntoIterator<Item = &'a T>,
                W: ::core::fmt::Write + ?Sized,
            {
                for item in items {
                    item.[<$op _to>](out)?;
                }
                Ok(())
            }
        }
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use core::fmt::{self, Write};

    crate::capability! {
        trait Greetable {
            fn greet => greet_impl;
        }
    }

    struct Hello;

    impl Greetable for Hello {
        fn greet_impl<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
            writeln!(out, "hello")
        }
    }

    #[test]
    fn test_generated_forwarders() {
        let mut out = String::new();
        Hello.greet_to(&mut out).unwrap();
        call_greet_to(&Hello, &mut out).unwrap();
        assert_eq!(out, "hello\nhello\n");
    }

    #[test]
    fn test_generated_loop() {
        let mut out = String::new();
        greet_all_to(&[Hello, Hello, Hello], &mut out).unwrap();
        assert_eq!(out.lines().count(), 3);

        let mut empty = String::new();
        greet_all_to(&[] as &[Hello], &mut empty).unwrap();
        assert!(empty.is_empty());
    }
}
