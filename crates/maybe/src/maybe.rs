use crate::error::{Error, Result, ABSENT_SOME, NO_VALUE_PRESENT};

/// Zero or one value of type `T`.
///
/// `Maybe` makes the absence of a value an explicit state that has to be
/// handled, instead of an implicit null that is discovered at runtime.
///
/// The absent state is the default one: a `Maybe<T>` obtained through
/// [`Default`] (or `#[derive(Default)]` on a containing struct) is `None`
/// without any further initialisation.
///
/// Instances are never mutated by the combinators below; every combinator
/// consumes `self` and hands back a new value. Use [`Maybe::as_ref`] to run a
/// combinator against a borrowed `Maybe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    #[default]
    None,
    Some(T),
}

impl<T> Maybe<T> {
    /// The absent value for `T`.
    pub const NONE: Self = Maybe::None;

    /// Constructs a `Maybe::Some(value)`.
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Constructs a `Maybe::Some` from a value that may itself be absent.
    ///
    /// Fails with [`Error::InvalidState`] if `value` is absent: a present
    /// `Maybe` never wraps an absent value.
    ///
    /// ```
    /// use maybe::{Error, Maybe};
    ///
    /// assert_eq!(Maybe::<u8>::try_some(3), Ok(Maybe::Some(3)));
    /// assert!(matches!(Maybe::<u8>::try_some(None), Err(Error::InvalidState(_))));
    /// ```
    pub fn try_some(value: impl Into<Option<T>>) -> Result<Self> {
        match value.into() {
            Some(value) => Ok(Maybe::Some(value)),
            None => Err(Error::invalid_state(ABSENT_SOME)),
        }
    }

    /// Constructs a `Maybe::None`.
    pub const fn none() -> Self {
        Maybe::None
    }

    /// Returns true if a value is present.
    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns true if a value is present.
    pub fn is_some(&self) -> bool {
        self.has_value()
    }

    /// Returns true if no value is present.
    pub fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the wrapped value.
    ///
    /// Fails with [`Error::InvalidState`] ("no value present") if the
    /// `Maybe` is absent.
    pub fn value(&self) -> Result<&T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(Error::invalid_state(NO_VALUE_PRESENT)),
        }
    }

    /// Takes the wrapped value out of the `Maybe`.
    ///
    /// Fails with [`Error::InvalidState`] ("no value present") if the
    /// `Maybe` is absent.
    pub fn into_value(self) -> Result<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(Error::invalid_state(NO_VALUE_PRESENT)),
        }
    }

    /// Returns the wrapped value, or `default` if there is none.
    pub fn value_or_default(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Returns the wrapped value, or computes one from `default`.
    ///
    /// `default` only runs when the `Maybe` is absent.
    pub fn value_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default(),
        }
    }

    /// Returns the wrapped value, or hands back `error` exactly as given.
    ///
    /// The error is moved into the `Err` untouched, so an `Rc`/`Arc` error
    /// keeps its identity:
    ///
    /// ```
    /// use std::rc::Rc;
    /// use maybe::Maybe;
    ///
    /// let err = Rc::new("boom");
    /// let raised = Maybe::<u32>::NONE.value_or_throw(Rc::clone(&err)).unwrap_err();
    /// assert!(Rc::ptr_eq(&err, &raised));
    /// ```
    pub fn value_or_throw<E>(self, error: E) -> core::result::Result<T, E> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error),
        }
    }

    /// Runs `some` with the wrapped value, or `none` when absent, and
    /// returns whichever result was produced. Exactly one branch runs.
    ///
    /// With `U = ()` this is the side-effect only form.
    pub fn case<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none(),
        }
    }

    /// Runs `some` with the wrapped value if there is one.
    pub fn if_some<S: FnOnce(T)>(self, some: S) {
        if let Maybe::Some(value) = self {
            some(value);
        }
    }

    /// Maps `Maybe<T>` to `Maybe<U>` by applying `f` to the contained value.
    ///
    /// `f` is not called when the `Maybe` is absent.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// The result of `f` is returned as is, so the outcome is a flat
    /// `Maybe<U>` and never a `Maybe<Maybe<U>>`. `f` is not called when the
    /// `Maybe` is absent.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let Maybe::Some(value) = self {
            if predicate(&value) {
                return Maybe::Some(value);
            }
        }
        Maybe::None
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    pub fn or(self, other: Maybe<T>) -> Self {
        match self {
            Maybe::Some(_) => self,
            Maybe::None => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `f`.
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, f: F) -> Self {
        match self {
            Maybe::Some(_) => self,
            Maybe::None => f(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// Iterates over the zero or one contained values.
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
