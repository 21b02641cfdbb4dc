#![no_std]

pub mod error;
pub use error::EmptyValueAccess;

pub mod iter;
pub use iter::{IntoIter, Iter};

pub mod opt;
pub use opt::Opt;

/// Capability contract for an external success/failure sum type.
///
/// `Opt::ok_or`, `Opt::ok_or_else` and `Opt::transpose` are generic over this
/// trait so the result type stays a collaborator rather than a dependency:
/// anything constructible from a success value or a failure value, with
/// matching extraction, plugs in.
pub trait ResultLike<T, E>: Sized {
    /// Builds the success form from `value`.
    fn from_ok(value: T) -> Self;

    /// Builds the failure form from `error`.
    fn from_err(error: E) -> Self;

    /// Returns true for the success form.
    fn is_ok(&self) -> bool;

    /// Extracts the success value. Fails fast when called on the failure form.
    fn into_ok(self) -> T;

    /// Extracts the failure value. Fails fast when called on the success form.
    fn into_err(self) -> E;
}
