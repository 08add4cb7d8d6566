//! Read API for the pokedex data service.
//!
//! This crate serves the Pokémon collection over HTTP:
//!
//! - [`router`] - Builds the axum router for `/pokemon` and `/pokemon/{name}`
//! - [`serve`] - Binds an address and serves until Ctrl-C
//! - [`ApiState`] - Store handle shared by the handlers
//! - [`ApiError`] - Request failures and their status codes

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod handlers;
mod server;

pub use error::{ApiError, Result};
pub use server::{ApiState, router, serve};
