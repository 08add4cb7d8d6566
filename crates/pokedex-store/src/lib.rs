//! Collection-oriented document store for the pokedex data service.
//!
//! This crate provides document persistence addressed by collection + key:
//!
//! - [`DocumentStore`] - Async trait over list/get/set/delete
//! - [`FsStore`] - One JSON file per document on the local filesystem
//! - [`MemoryStore`] - In-process store for tests and embedding
//! - [`ClearReport`] - Outcome of deleting every document in a collection

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod fs;
mod memory;
mod store;

pub use fs::FsStore;
pub use memory::MemoryStore;
pub use store::{ClearReport, DocumentStore, Result, StoreError, StoredDocument, validate_key};
