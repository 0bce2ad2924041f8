//! UI utilities for terminal output
//!
//! Progress spinners are drawn on stderr and cleared before results are printed.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
