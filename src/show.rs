//! Rendering instances.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::cmp::{Contramap, Natural};

/// Renders values of `T` as strings.
pub trait Show<T> {
    fn show(&self, value: &T) -> String;
}

impl<T, S> Show<T> for &'_ S
where
    S: Show<T> + ?Sized,
{
    fn show(&self, value: &T) -> String {
        S::show(self, value)
    }
}

impl<T, S> Show<T> for Box<S>
where
    S: Show<T> + ?Sized,
{
    fn show(&self, value: &T) -> String {
        S::show(self, value)
    }
}

impl<T> Show<T> for Natural
where
    T: Display,
{
    fn show(&self, value: &T) -> String {
        value.to_string()
    }
}

impl<I, F, T, U> Show<U> for Contramap<I, F, T>
where
    I: Show<T>,
    F: Fn(&U) -> T,
{
    fn show(&self, value: &U) -> String {
        self.inner().show(&self.project(value))
    }
}

/// A [`Show`] defined by a function.
#[derive(Clone, Copy)]
pub struct FromShow<F> {
    f: F,
}

impl<T, F> Show<T> for FromShow<F>
where
    F: Fn(&T) -> String,
{
    fn show(&self, value: &T) -> String {
        (self.f)(value)
    }
}

/// Constructs a [`Show`] from a function.
///
/// # Examples
///
/// ```rust
/// use tagsum::show::{self, Show};
///
/// let hex = show::from_show(|x: &u8| format!("{:#04x}", x));
/// assert_eq!(hex.show(&255), "0xff");
/// ```
pub fn from_show<T, F>(f: F) -> FromShow<F>
where
    F: Fn(&T) -> String,
{
    FromShow { f }
}
