//! # Fundtrace Domain Models
//!
//! Data structures shared by the funding scanner and its configuration layer.
//!
//! ## Key Models
//!
//! - **FundingRecord**: funding strings found in one PDF, never empty
//! - **ErrorEntry**: a PDF that failed to read or parse, with its log line
//! - **PatternList**: the ordered regular expressions used to detect funding mentions
//!
//! All models serialize with serde so reports can be emitted as JSON.

pub mod funding;
pub mod patterns;


pub use funding::*;
pub use patterns::*;
