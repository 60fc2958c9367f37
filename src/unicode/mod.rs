//! Unicode utilities for display width.

mod width;

pub use width::{JoinState, ZWJ, printing_width, printing_width_stripped, walk};
