//! Core library components.
//!
//! Secret lookup and activation code derivation, free of any terminal or
//! process handling so both halves can be tested in isolation.

pub mod code;
pub mod constants;
pub mod properties;
pub mod types;
