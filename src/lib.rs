//! vdd - Value-driven design requirements tooling
//!
//! This crate reads CODA requirements models out of spreadsheet-style grids
//! and derives requirement weights from pairwise binary comparisons.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
