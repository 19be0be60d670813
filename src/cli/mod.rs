//! Command-line interface module
//!
//! - (no command): the daily wallpaper pass
//! - state show: print where state lives and what it records
//! - state reset: forget the last applied date
pub mod run;
pub mod state;
