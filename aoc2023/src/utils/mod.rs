//! Helpers shared between puzzle days

pub mod dp_cache;
pub mod interval;
pub mod line_stream;
mod trace;
