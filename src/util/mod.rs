//! Utility modules for Lexiscope.

pub mod simd;
