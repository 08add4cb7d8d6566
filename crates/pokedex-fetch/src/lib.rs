//! PokeAPI client for the pokedex population pipeline.
//!
//! This crate provides the fetch side of a population run:
//!
//! - [`url`] - Builds PokeAPI endpoint URLs
//! - [`PokeApiClient`] - HTTP client for rosters and entity payloads
//! - [`JOHTO_POKEDEX_ID`] / [`MOVE_GENERATIONS`] - The fixed roster sources

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod roster;
pub mod url;

pub use client::{ClientConfig, FetchError, PokeApiClient, Result};
pub use roster::{JOHTO_POKEDEX_ID, MOVE_GENERATIONS};
