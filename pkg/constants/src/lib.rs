//! Centralized constants for the kfn project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod names;
pub mod paths;
