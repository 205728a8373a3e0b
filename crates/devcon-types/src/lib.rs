//! Foundation types for DEVCON.
//!
//! This crate contains the types shared by the console core and its hosts:
//! typed parameter values, console input events, configuration, and error
//! types.

pub mod config;
pub mod error;
pub mod input;
pub mod value;
