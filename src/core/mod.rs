//! Shared constants, errors and the game session.

#![allow(unused_imports)]

pub mod constants;
pub mod error;
pub mod session;

pub use constants::*;
pub use error::*;
pub use session::*;
