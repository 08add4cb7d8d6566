//! CLI command implementations.

pub(crate) mod populate;
pub(crate) mod serve;
