//! Conversions from plain Rust values into [`Maybe`].

use alloc::string::String;

use crate::Maybe;

/// Converts a value that may be absent into a [`Maybe`].
///
/// `None` becomes `Maybe::None`, `Some(v)` becomes `Maybe::Some(v)`.
pub trait ToMaybe<T> {
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

/// Free-function form of [`ToMaybe::to_maybe`].
pub fn to_maybe<T>(value: Option<T>) -> Maybe<T> {
    value.to_maybe()
}

/// Treats an empty string the same as an absent one.
pub trait NoneIfEmpty {
    type Output;

    /// `Maybe::None` if the string is absent or has zero length, otherwise
    /// `Maybe::Some` of the string.
    fn none_if_empty(self) -> Maybe<Self::Output>;
}

impl<'a> NoneIfEmpty for &'a str {
    type Output = &'a str;

    fn none_if_empty(self) -> Maybe<&'a str> {
        if self.is_empty() { Maybe::None } else { Maybe::Some(self) }
    }
}

impl NoneIfEmpty for String {
    type Output = String;

    fn none_if_empty(self) -> Maybe<String> {
        if self.is_empty() { Maybe::None } else { Maybe::Some(self) }
    }
}

impl<S: NoneIfEmpty> NoneIfEmpty for Option<S> {
    type Output = S::Output;

    fn none_if_empty(self) -> Maybe<S::Output> {
        self.to_maybe().and_then(NoneIfEmpty::none_if_empty)
    }
}

/// Takes the first element of a sequence, if any.
///
/// Only the first element is pulled from the iterator; the rest of a lazy
/// sequence is never evaluated.
pub trait FirstOrNone: IntoIterator + Sized {
    fn first_or_none(self) -> Maybe<Self::Item> {
        self.into_iter().next().to_maybe()
    }
}

impl<I: IntoIterator> FirstOrNone for I {}

/// [`FirstOrNone`] for sequences of values that may be absent.
///
/// The first element decides: an absent first element gives `Maybe::None`
/// and later elements are not searched.
pub trait FirstOrNoneFlat<T>: IntoIterator<Item = Option<T>> + Sized {
    fn first_or_none_flat(self) -> Maybe<T> {
        self.first_or_none().and_then(ToMaybe::to_maybe)
    }
}

impl<T, I: IntoIterator<Item = Option<T>>> FirstOrNoneFlat<T> for I {}
