//! Compile-time folds over lists of types.
//!
//! A type list is a tuple type: `(i32, f32, u32)` is the list `i32, f32, u32`.
//! Lists of up to eight types are supported. Everything in this module except
//! the visitors is evaluated by the compiler, so results can be used in
//! `const` items and `assert!`s in `const` context.

/// A tuple viewed as an ordered list of types.
pub trait TypeList {
    const LEN: usize;
}

/// A yes/no question asked of a single type.
pub trait Predicate<T: ?Sized> {
    const VALUE: bool;
}

/// Folds of a [`Predicate`] over every type in a list.
pub trait Fold<P>: TypeList {
    const COUNT: usize;
    const ALL: bool;
    const ANY: bool;
    const NONE: bool;
}

/// Per-type callback used by [`ForEach`].
pub trait TypeVisitor<T: ?Sized> {
    fn visit(&mut self);
}

pub trait ForEach<V>: TypeList {
    /// Calls the visitor once per type, in list order.
    fn for_each(visitor: &mut V);
}

macro_rules! impl_type_list {
    ($($name:ident)*) => {
        impl<$($name),*> TypeList for ($($name,)*) {
            const LEN: usize = <[&str]>::len(&[$(stringify!($name)),*]);
        }

        impl<P, $($name),*> Fold<P> for ($($name,)*)
        where
            $(P: Predicate<$name>,)*
        {
            const COUNT: usize = 0 $(+ <P as Predicate<$name>>::VALUE as usize)*;
            const ALL: bool = true $(&& <P as Predicate<$name>>::VALUE)*;
            const ANY: bool = false $(|| <P as Predicate<$name>>::VALUE)*;
            const NONE: bool = !<Self as Fold<P>>::ANY;
        }

        impl<V, $($name),*> ForEach<V> for ($($name,)*)
        where
            $(V: TypeVisitor<$name>,)*
        {
            #[allow(unused_variables)]
            fn for_each(visitor: &mut V) {
                $(<V as TypeVisitor<$name>>::visit(visitor);)*
            }
        }
    };
}

impl_type_list!();
impl_type_list!(A0);
impl_type_list!(A0 A1);
impl_type_list!(A0 A1 A2);
impl_type_list!(A0 A1 A2 A3);
impl_type_list!(A0 A1 A2 A3 A4);
impl_type_list!(A0 A1 A2 A3 A4 A5);
impl_type_list!(A0 A1 A2 A3 A4 A5 A6);
impl_type_list!(A0 A1 A2 A3 A4 A5 A6 A7);

pub const fn count<L>() -> usize
where
    L: TypeList,
{
    L::LEN
}

pub const fn count_if<P, L>() -> usize
where
    L: Fold<P>,
{
    L::COUNT
}

pub const fn all_of<P, L>() -> bool
where
    L: Fold<P>,
{
    L::ALL
}

pub const fn any_of<P, L>() -> bool
where
    L: Fold<P>,
{
    L::ANY
}

pub const fn none_of<P, L>() -> bool
where
    L: Fold<P>,
{
    L::NONE
}

pub fn for_each_type<L, V>(visitor: &mut V)
where
    L: ForEach<V>,
{
    L::for_each(visitor);
}

/// Like [`for_each_type`], with the list taken from the type of `_list`.
pub fn for_each_tuple_type<L, V>(_list: &L, visitor: &mut V)
where
    L: ForEach<V>,
{
    L::for_each(visitor);
}

/// Marker for the primitive integer and floating point types.
pub trait Arithmetic {}

pub struct IsSigned;
pub struct IsUnsigned;
pub struct IsFloat;
pub struct IsArithmetic;

macro_rules! numeric_predicates {
    ($($ty:ty => $signed:expr, $float:expr;)*) => {
        $(
            impl Arithmetic for $ty {}

            impl Predicate<$ty> for IsSigned {
                const VALUE: bool = $signed;
            }

            impl Predicate<$ty> for IsUnsigned {
                const VALUE: bool = !$signed;
            }

            impl Predicate<$ty> for IsFloat {
                const VALUE: bool = $float;
            }

            impl Predicate<$ty> for IsArithmetic {
                const VALUE: bool = true;
            }
        )*
    };
}

numeric_predicates! {
    i8 => true, false;
    i16 => true, false;
    i32 => true, false;
    i64 => true, false;
    i128 => true, false;
    isize => true, false;
    u8 => false, false;
    u16 => false, false;
    u32 => false, false;
    u64 => false, false;
    u128 => false, false;
    usize => false, false;
    f32 => true, true;
    f64 => true, true;
}

// Non-numeric types answer "no" to every numeric question.
macro_rules! non_numeric_predicates {
    ($($ty:ty),*) => {
        $(
            impl Predicate<$ty> for IsSigned {
                const VALUE: bool = false;
            }

            impl Predicate<$ty> for IsUnsigned {
                const VALUE: bool = false;
            }

            impl Predicate<$ty> for IsFloat {
                const VALUE: bool = false;
            }

            impl Predicate<$ty> for IsArithmetic {
                const VALUE: bool = false;
            }
        )*
    };
}

non_numeric_predicates!(bool, char, (), String, str);

/// A visitor that only accepts arithmetic types. Running it over a list that
/// contains anything else is rejected by the compiler.
pub struct AssertArithmetic;

impl<T> TypeVisitor<T> for AssertArithmetic
where
    T: Arithmetic,
{
    fn visit(&mut self) {}
}

/// Collects [`std::any::type_name`] for each visited type.
#[derive(Debug, Default)]
pub struct TypeNames(pub Vec<&'static str>);

impl<T> TypeVisitor<T> for TypeNames
where
    T: ?Sized,
{
    fn visit(&mut self) {
        self.0.push(std::any::type_name::<T>());
    }
}
