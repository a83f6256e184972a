//! # lotkeep-cli — Facility Gate Command-Line Interface
//!
//! A thin clap front end over `lotkeep-facility`.
//!
//! ## Subcommands
//!
//! - `gate`: line-oriented park/unpark/status session on stdin/stdout
//! - `capacity`: print the resolved per-class capacities
//!
//! ## Crate Policy
//!
//! - Argument parsing lives next to each handler; allocation logic lives in
//!   the domain crates.
//! - Logs go to stderr. Stdout carries only responses, so sessions can be
//!   scripted and diffed.

pub mod capacity;
pub mod config;
pub mod gate;
