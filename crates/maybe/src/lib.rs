#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub use error::{Error, Result};

pub mod maybe;
pub use maybe::Maybe;

pub mod ext;
pub use ext::{to_maybe, FirstOrNone, FirstOrNoneFlat, NoneIfEmpty, ToMaybe};

#[cfg(feature = "serde")]
mod serialize;
