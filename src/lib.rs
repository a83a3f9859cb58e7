//! Parascan - API parameter miner for JavaScript sources
//!
//! Parascan is a CLI tool and library that extracts candidate API parameter
//! names from client-side JavaScript, classifies them by likely role
//! (identifier, authentication, pagination, timestamp, status) and ranks and
//! deduplicates them for human review. It is a heuristic miner, not a parser.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scanners, classification, deduplication)
//! - `output`: Result files and JSON rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
