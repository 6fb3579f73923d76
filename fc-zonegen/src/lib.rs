//! Command-line support for generating Cisco SAN fabric zoning commands.
//!
//! The heavy lifting (list parsing, zone pairing, rendering) lives in
//! `wwn-zone-core`. This crate adds what a run needs around it:
//!
//! - [`config`]: resolve command-line values and fabric defaults into a [`config::GenerateConfig`]
//! - [`defaults`]: load per-fabric defaults from TOML
//! - [`verify`]: flag suspicious input before anything is written
//! - [`report`]: colored terminal output
//! - [`usage`]: help text and the extended deployment guide

pub mod config;
pub mod defaults;
pub mod report;
pub mod usage;
pub mod verify;
