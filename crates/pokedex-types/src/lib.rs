//! Core types for the pokedex data service.
//!
//! This crate provides the data structures shared by the fetch client, the
//! document store, the population pipeline and the read API:
//!
//! - [`Dataset`] - Which dataset a population run targets
//! - [`RosterRef`] - Pointer to one entity to fetch during a run
//! - [`Document`] - Generic stored document (map of string to JSON value)
//! - [`PokemonListItem`] / [`PokemonDetail`] - Typed read API views
//! - [`MoveSummary`] - Typed view over a stored move

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod document;
mod error;
mod moves;
mod pokemon;
mod roster;

pub use dataset::Dataset;
pub use document::{Document, decode_document, normalize_name};
pub use error::{PokedexError, Result};
pub use moves::{EffectEntry, MoveSummary};
pub use pokemon::{
    AbilitySlot, DetailSprites, ListSprites, NamedRef, PokemonDetail, PokemonListItem, StatEntry,
    TypeSlot,
};
pub use roster::RosterRef;
