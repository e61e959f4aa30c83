//! CLI library components for the header mapper.

pub mod logging;
