//! Command-line driver for `form-enhance`.
//!
//! Loads a rendered HTML page, installs the password toggles and inline
//! validation, optionally replays user actions, and reports the resulting UI
//! state as text or JSON.

pub mod cli;
