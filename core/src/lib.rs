//! # logcmp core
//!
//! Compares two snapshots of domain/IP observation logs.
//!
//! ## Pipeline
//! * **[`extract`]**: reads tab-separated data files into a [`snapshot::Snapshot`].
//! * **[`canonical`]**: deduplicates and orders values, IP addresses numerically.
//! * **[`compare`]**: old-only, new-only and consistent domains and IPs.
//! * **[`pipeline`]**: runs the three steps above for two lists of files.
//!
//! ## Around the pipeline
//! * **[`discovery`]**: finds snapshot directories and their data files.
//! * **[`report`]**: builds, renders and writes the text report.

pub mod canonical;
pub mod compare;
pub mod discovery;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod snapshot;
