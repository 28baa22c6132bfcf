//! Azul Game Engine and terminal driver
//!
//! Re-exports the rules engine and adds terminal rendering for the `azul`
//! binary.

pub use azul_engine::*;

pub mod display;
