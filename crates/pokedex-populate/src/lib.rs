//! Population pipeline for the pokedex data service.
//!
//! This crate rebuilds a dataset's collection from the PokeAPI:
//!
//! - [`Populator`] - Runs the enumerate/clear/probe/fetch-store pipeline
//! - [`PopulateConfig`] - Inter-request delay and other knobs
//! - [`PopulationReport`] / [`ItemError`] - Outcome of a run
//! - [`PopulationRun`] / [`RunStatus`] - Persisted run-state record

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod pipeline;
mod report;
mod run;

pub use error::{PopulateError, Result};
pub use pipeline::{PROBE_KEY, PopulateConfig, Populator};
pub use report::{ItemError, ItemStage, PopulationReport};
pub use run::{PopulationRun, RUNS_COLLECTION, RunId, RunStatus};
