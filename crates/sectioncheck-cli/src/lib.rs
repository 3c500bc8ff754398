//! sectioncheck CLI library.
//!
//! This crate provides the functionality behind the `sectioncheck` binary:
//! roster dataset loading and the check command.

pub mod commands;
pub mod input;
