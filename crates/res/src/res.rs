use opt::{Opt, ResultLike};

use crate::error::WrongVariantAccess;

/// A success (`Ok`) or failure (`Err`) outcome.
///
/// The companion of `Opt`: `Opt::ok_or` and `Opt::transpose` target any
/// `ResultLike` implementor, and this is the canonical one.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Res<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Res<T, E> {
    /// Returns true if the outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Res::Ok(_))
    }

    /// Returns true if the outcome is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Res::Err(_))
    }

    /// Converts the success value into an `Opt`, discarding any error.
    pub fn ok(self) -> Opt<T> {
        match self {
            Res::Ok(value) => Opt::Some(value),
            Res::Err(_) => Opt::None,
        }
    }

    /// Converts the failure value into an `Opt`, discarding any success.
    pub fn err(self) -> Opt<E> {
        match self {
            Res::Ok(_) => Opt::None,
            Res::Err(error) => Opt::Some(error),
        }
    }

    /// Maps the success value with `f`, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Res<U, E> {
        match self {
            Res::Ok(value) => Res::Ok(f(value)),
            Res::Err(error) => Res::Err(error),
        }
    }

    /// Maps the failure value with `f`, leaving a success untouched.
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Res<T, G> {
        match self {
            Res::Ok(value) => Res::Ok(value),
            Res::Err(error) => Res::Err(f(error)),
        }
    }

    /// Returns the success value, panicking on a failure.
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }

    /// Returns the failure value, panicking on a success.
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of `unwrap`: the wrong variant comes back as a typed
    /// error.
    pub fn try_unwrap(self) -> Result<T, WrongVariantAccess> {
        match self {
            Res::Ok(value) => Ok(value),
            Res::Err(_) => Err(WrongVariantAccess::UNWRAP),
        }
    }

    /// Fallible form of `unwrap_err`.
    pub fn try_unwrap_err(self) -> Result<E, WrongVariantAccess> {
        match self {
            Res::Ok(_) => Err(WrongVariantAccess::UNWRAP_ERR),
            Res::Err(error) => Ok(error),
        }
    }
}

impl<T, E> ResultLike<T, E> for Res<T, E> {
    fn from_ok(value: T) -> Self {
        Res::Ok(value)
    }

    fn from_err(error: E) -> Self {
        Res::Err(error)
    }

    fn is_ok(&self) -> bool {
        matches!(self, Res::Ok(_))
    }

    fn into_ok(self) -> T {
        self.unwrap()
    }

    fn into_err(self) -> E {
        self.unwrap_err()
    }
}
