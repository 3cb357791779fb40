//! Shared drawing helpers used by render modules

pub mod popup;
pub mod spinner;
