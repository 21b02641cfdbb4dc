use crate::ResultLike;
use crate::error::EmptyValueAccess;
use crate::iter::Iter;

/// A value that is either present (`Some`) or absent (`None`).
///
/// Every combinator returns a new value; nothing mutates the receiver in
/// place. Callbacks run synchronously, at most once, and only when the
/// variant check does not already decide the outcome.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opt<T> {
    Some(T),
    None,
}

impl<T> Opt<T> {
    /// Constructs an `Opt::Some(value)` variant.
    pub fn some(value: T) -> Self {
        Opt::Some(value)
    }

    /// Constructs an `Opt::None` variant.
    pub fn none() -> Self {
        Opt::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Opt::None)
    }

    /// Returns true if the value is `Some` and the predicate holds for it.
    ///
    /// The predicate is not invoked on `None`.
    pub fn is_some_and<F: FnOnce(T) -> bool>(self, predicate: F) -> bool {
        match self {
            Opt::Some(value) => predicate(value),
            Opt::None => false,
        }
    }

    /// Returns the held value, panicking if the `Opt` is empty.
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the held value, panicking with `msg` if the `Opt` is empty.
    pub fn expect(self, msg: &'static str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of `unwrap`: absence comes back as a typed error.
    pub fn try_unwrap(self) -> Result<T, EmptyValueAccess> {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(EmptyValueAccess::UNWRAP),
        }
    }

    /// Fallible form of `expect`, carrying `msg` in the error.
    pub fn try_expect(self, msg: &'static str) -> Result<T, EmptyValueAccess> {
        match self {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(EmptyValueAccess::with_message(msg)),
        }
    }

    /// Returns the held value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => default,
        }
    }

    /// Returns the held value, or computes one lazily on `None`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => default(),
        }
    }

    /// Maps `Opt<T>` to `Opt<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    /// Applies `f` to the contained value, or returns the eagerly supplied
    /// `default` on `None`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a default lazily on
    /// `None`.
    pub fn map_or_else<U, D: FnOnce() -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => default(),
        }
    }

    /// Invokes `f` on the contained value for its side effect, returning the
    /// `Opt` unchanged either way.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Opt::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Keeps the value if the predicate holds for it, `None` otherwise.
    ///
    /// The predicate is not invoked on `None`.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Opt::Some(value) if predicate(&value) => Opt::Some(value),
            _ => Opt::None,
        }
    }

    /// Returns `opt` if the value is `Some`, `None` otherwise.
    pub fn and<U>(self, opt: Opt<U>) -> Opt<U> {
        match self {
            Opt::Some(_) => opt,
            Opt::None => Opt::None,
        }
    }

    /// Returns `f(value)` if the value is `Some`, `None` otherwise.
    pub fn and_then<U, F: FnOnce(T) -> Opt<U>>(self, f: F) -> Opt<U> {
        match self {
            Opt::Some(value) => f(value),
            Opt::None => Opt::None,
        }
    }

    /// Returns the `Opt` if it is `Some`, `opt` otherwise.
    pub fn or(self, opt: Opt<T>) -> Opt<T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => opt,
        }
    }

    /// Returns the `Opt` if it is `Some`, otherwise computes a fallback
    /// lazily.
    pub fn or_else<F: FnOnce() -> Opt<T>>(self, f: F) -> Opt<T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => f(),
        }
    }

    /// Returns whichever of the two is `Some` if exactly one is, `None`
    /// otherwise.
    pub fn xor(self, opt: Opt<T>) -> Opt<T> {
        match (self, opt) {
            (Opt::Some(value), Opt::None) => Opt::Some(value),
            (Opt::None, Opt::Some(value)) => Opt::Some(value),
            _ => Opt::None,
        }
    }

    /// Pairs the two contained values if both are `Some`, `None` otherwise.
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self, other) {
            (Opt::Some(a), Opt::Some(b)) => Opt::Some((a, b)),
            _ => Opt::None,
        }
    }

    /// Combines the two contained values with `f` if both are `Some`, `None`
    /// otherwise.
    pub fn zip_with<U, R, F: FnOnce(T, U) -> R>(self, other: Opt<U>, f: F) -> Opt<R> {
        match (self, other) {
            (Opt::Some(a), Opt::Some(b)) => Opt::Some(f(a, b)),
            _ => Opt::None,
        }
    }

    /// Converts `Some(v)` into the success form and `None` into the failure
    /// form built from `error`.
    pub fn ok_or<E, R: ResultLike<T, E>>(self, error: E) -> R {
        match self {
            Opt::Some(value) => R::from_ok(value),
            Opt::None => R::from_err(error),
        }
    }

    /// As `ok_or`, but the error value is computed lazily, only on `None`.
    pub fn ok_or_else<E, F: FnOnce() -> E, R: ResultLike<T, E>>(self, error: F) -> R {
        match self {
            Opt::Some(value) => R::from_ok(value),
            Opt::None => R::from_err(error()),
        }
    }

    /// Inverts an `Opt` of a result into a result of an `Opt`.
    ///
    /// `Some(Ok(v))` becomes `Ok(Some(v))`, `Some(Err(e))` becomes `Err(e)`
    /// and `None` becomes `Ok(None)`.
    pub fn transpose<U, E, R>(self) -> R
    where
        T: ResultLike<U, E>,
        R: ResultLike<Opt<U>, E>,
    {
        match self {
            Opt::Some(res) => {
                if res.is_ok() {
                    R::from_ok(Opt::Some(res.into_ok()))
                } else {
                    R::from_err(res.into_err())
                }
            }
            Opt::None => R::from_ok(Opt::None),
        }
    }

    /// Returns an iterator yielding the one contained value, or nothing.
    ///
    /// The `Opt` is left untouched; a fresh call yields a fresh iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Invokes exactly one of the two branches and returns its result.
    pub fn match_with<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Opt::Some(value) => on_some(value),
            Opt::None => on_none(),
        }
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }
}

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Opt<T> {
        match self {
            Opt::Some(inner) => inner,
            Opt::None => Opt::None,
        }
    }
}

impl<A, B> Opt<(A, B)> {
    /// Splits an optional pair into a pair of `Opt`s.
    pub fn unzip(self) -> (Opt<A>, Opt<B>) {
        match self {
            Opt::Some((a, b)) => (Opt::Some(a), Opt::Some(b)),
            Opt::None => (Opt::None, Opt::None),
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Opt::Some(v),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }
}
