//! Monster templates and random monster generation.

#![allow(unused_imports)]

pub mod data;
pub mod generation;
pub mod types;

pub use data::*;
pub use generation::*;
pub use types::*;
