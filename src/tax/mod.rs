//! Tax policy applied at checkout

pub mod rate;

pub use rate::*;
