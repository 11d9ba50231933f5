//! Building an element directly from an argument bundle.
//!
//! An argument bundle is a tuple. The tuple's element types carry how each
//! argument was handed over: an owned value is moved into the constructor, a
//! `&T` can only be read (and copied if the constructor wants to keep it),
//! and a `&mut T` can be written through.

/// A type that can be constructed from the argument bundle `Args`.
///
/// A type implements this once per bundle shape it accepts, so the arity and
/// the types of the bundle are checked when the call site is compiled.
/// Validation of the argument *values* happens in [`Construct::construct`],
/// which may fail with [`Construct::Error`].
pub trait Construct<Args>: Sized {
    type Error;

    fn construct(args: Args) -> Result<Self, Self::Error>;
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Pair {
        name: String,
        weight: u32,
    }

    impl Construct<(String, u32)> for Pair {
        type Error = Infallible;

        fn construct((name, weight): (String, u32)) -> Result<Self, Self::Error> {
            Ok(Pair { name, weight })
        }
    }

    impl<'a> Construct<(&'a str,)> for Pair {
        type Error = &'static str;

        fn construct((name,): (&'a str,)) -> Result<Self, Self::Error> {
            if name.is_empty() {
                return Err("empty name");
            }
            Ok(Pair {
                name: name.to_owned(),
                weight: 0,
            })
        }
    }

    #[test]
    fn selects_impl_by_bundle_shape() {
        let owned = Pair::construct((String::from("a"), 3)).unwrap();
        assert_eq!(owned.name, "a");
        assert_eq!(owned.weight, 3);

        let borrowed = Pair::construct(("b",)).unwrap();
        assert_eq!(borrowed.name, "b");
        assert_eq!(borrowed.weight, 0);
    }

    #[test]
    fn reports_invalid_arguments() {
        assert!(matches!(Pair::construct(("",)), Err("empty name")));
    }
}
