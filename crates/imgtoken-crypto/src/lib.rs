#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]

pub mod query;
pub mod tokens;

pub use crate::query::*;
pub use crate::tokens::*;
