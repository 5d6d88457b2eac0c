//! Equivalence and total ordering instances.
//!
//! This module provides the [`Equivalence`] and [`Order`] traits and a small set of instances.
//! Unlike the standard [`PartialEq`] and [`Ord`] traits, these are implemented by *values* that
//! describe a relation over some other type `T`. This allows more than one relation per type and
//! allows relations to be chosen per variant when [deriving][`derive`] over a [`Sum`].
//!
//! | Instance         | Equivalence       | Order             |
//! |------------------|-------------------|-------------------|
//! | [`Natural`]      | `T: PartialEq`    | `T: Ord`          |
//! | [`FromEquals`]   | closure           |                   |
//! | [`FromCompare`]  | `compare = Equal` | closure           |
//! | [`Reverse`]      | inner             | inner, reversed   |
//! | [`Contramap`]    | inner, mapped     | inner, mapped     |
//! | [`FloatTotal`]   | canonical         | `NaN` is greatest |
//! | [`AbsDiff`]      | within epsilon    |                   |
//!
//! [`derive`]: crate::derive
//! [`Sum`]: crate::Sum

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::marker::PhantomData;
use num_traits::float::FloatCore;

/// An equivalence relation over `T`.
///
/// Implementations are expected to be reflexive, symmetric, and transitive. This is not enforced:
/// derived instances preserve these laws but do not establish them.
pub trait Equivalence<T> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// A total ordering over `T`.
///
/// Implementations must be consistent with their [`Equivalence`]: `compare(a, b)` is
/// `Ordering::Equal` if and only if `equals(a, b)` is `true`.
pub trait Order<T>: Equivalence<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, E> Equivalence<T> for &'_ E
where
    E: Equivalence<T> + ?Sized,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        E::equals(self, a, b)
    }
}

impl<T, E> Equivalence<T> for Box<E>
where
    E: Equivalence<T> + ?Sized,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        E::equals(self, a, b)
    }
}

impl<T, O> Order<T> for &'_ O
where
    O: Order<T> + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        O::compare(self, a, b)
    }
}

impl<T, O> Order<T> for Box<O>
where
    O: Order<T> + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        O::compare(self, a, b)
    }
}

/// The relations that a type defines for itself.
///
/// `Natural` is an [`Equivalence`] for any `T: PartialEq`, an [`Order`] for any `T: Ord`, and a
/// [`Show`] for any `T: Display`.
///
/// [`Show`]: crate::show::Show
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T> Equivalence<T> for Natural
where
    T: PartialEq,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T> Order<T> for Natural
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An [`Equivalence`] defined by a function.
///
/// See [`from_equals`].
#[derive(Clone, Copy)]
pub struct FromEquals<F> {
    f: F,
}

impl<T, F> Equivalence<T> for FromEquals<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.f)(a, b)
    }
}

/// Constructs an [`Equivalence`] from a function.
///
/// # Examples
///
/// ```rust
/// use tagsum::cmp::{self, Equivalence};
///
/// let parity = cmp::from_equals(|a: &u32, b: &u32| a % 2 == b % 2);
/// assert!(parity.equals(&1, &3));
/// assert!(!parity.equals(&1, &2));
/// ```
pub fn from_equals<T, F>(f: F) -> FromEquals<F>
where
    F: Fn(&T, &T) -> bool,
{
    FromEquals { f }
}

/// An [`Order`] defined by a three-way comparison function.
///
/// The equivalence of this instance is `compare(a, b) == Ordering::Equal`. See [`from_compare`].
#[derive(Clone, Copy)]
pub struct FromCompare<F> {
    f: F,
}

impl<T, F> Equivalence<T> for FromCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.f)(a, b) == Ordering::Equal
    }
}

impl<T, F> Order<T> for FromCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }
}

/// Constructs an [`Order`] from a three-way comparison function.
pub fn from_compare<T, F>(f: F) -> FromCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FromCompare { f }
}

/// Reverses the ordering of an [`Order`].
///
/// The equivalence is that of the inner instance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<O>(pub O);

impl<T, O> Equivalence<T> for Reverse<O>
where
    O: Equivalence<T>,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self.0.equals(a, b)
    }
}

impl<T, O> Order<T> for Reverse<O>
where
    O: Order<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

pub fn reverse<O>(order: O) -> Reverse<O> {
    Reverse(order)
}

/// An instance over `U` built from an instance over `T` and a projection from `U` to `T`.
///
/// See [`contramap`].
pub struct Contramap<I, F, T> {
    inner: I,
    f: F,
    phantom: PhantomData<fn() -> T>,
}

impl<I, F, T> Contramap<I, F, T> {
    pub(crate) fn inner(&self) -> &I {
        &self.inner
    }

    pub(crate) fn project<U>(&self, value: &U) -> T
    where
        F: Fn(&U) -> T,
    {
        (self.f)(value)
    }
}

impl<I, F, T, U> Equivalence<U> for Contramap<I, F, T>
where
    I: Equivalence<T>,
    F: Fn(&U) -> T,
{
    fn equals(&self, a: &U, b: &U) -> bool {
        self.inner.equals(&self.project(a), &self.project(b))
    }
}

impl<I, F, T, U> Order<U> for Contramap<I, F, T>
where
    I: Order<T>,
    F: Fn(&U) -> T,
{
    fn compare(&self, a: &U, b: &U) -> Ordering {
        self.inner.compare(&self.project(a), &self.project(b))
    }
}

/// Lifts an instance over `T` to an instance over `U` via a projection.
///
/// The resulting instance is an [`Equivalence`], [`Order`], or [`Show`] whenever the inner
/// instance is.
///
/// # Examples
///
/// ```rust
/// use tagsum::cmp::{self, Natural, Order};
///
/// let by_len = cmp::contramap(Natural, |text: &&str| text.len());
/// assert!(by_len.compare(&"bb", &"a").is_gt());
/// ```
///
/// [`Show`]: crate::show::Show
pub fn contramap<I, F, T, U>(inner: I, f: F) -> Contramap<I, F, T>
where
    F: Fn(&U) -> T,
{
    Contramap {
        inner,
        f,
        phantom: PhantomData,
    }
}

/// Total equivalence and ordering for primitive floating-point values.
///
/// Zeroes are equivalent regardless of sign and all `NaN`s are equivalent. `NaN` is greater than
/// every other value, giving the total ordering `[-INF | ... | 0 | ... | INF | NaN]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatTotal;

impl<T> Equivalence<T> for FloatTotal
where
    T: FloatCore,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        if a.is_nan() {
            b.is_nan()
        }
        else {
            a == b
        }
    }
}

impl<T> Order<T> for FloatTotal
where
    T: FloatCore,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match a.partial_cmp(b) {
            Some(ordering) => ordering,
            None => {
                if a.is_nan() {
                    if b.is_nan() {
                        Ordering::Equal
                    }
                    else {
                        Ordering::Greater
                    }
                }
                else {
                    Ordering::Less
                }
            }
        }
    }
}

/// Approximate equivalence of floating-point values within an absolute epsilon.
///
/// Note that this relation is not transitive, so it is not a lawful [`Equivalence`]. Derived
/// instances inherit this.
#[cfg(feature = "approx")]
#[derive(Clone, Copy, Debug)]
pub struct AbsDiff<E> {
    pub epsilon: E,
}

#[cfg(feature = "approx")]
impl<T> Equivalence<T> for AbsDiff<T>
where
    T: approx::AbsDiffEq<Epsilon = T> + Copy,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        a.abs_diff_eq(b, self.epsilon)
    }
}

#[cfg(feature = "approx")]
impl<E> Default for AbsDiff<E>
where
    E: FloatCore,
{
    fn default() -> Self {
        AbsDiff {
            epsilon: E::epsilon(),
        }
    }
}
