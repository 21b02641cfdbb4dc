#![no_std]

pub mod error;
pub use error::WrongVariantAccess;

pub mod res;
pub use res::Res;
