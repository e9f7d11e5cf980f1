//! The player, their inventory and resting.

#![allow(unused_imports)]

pub mod inventory;
pub mod player;
pub mod rest;

pub use inventory::*;
pub use player::*;
pub use rest::*;
