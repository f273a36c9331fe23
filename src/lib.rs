//! Stratified clustering over dense vectors.
//!
//! `stratify` buckets frames into strata along an auxiliary one-dimensional
//! coordinate, fits one independent partitional clustering model per
//! non-empty stratum, and exposes a single global cluster-id space across
//! all strata.
//!
//! The clustering algorithm itself is external: callers supply any type
//! implementing [`FitPartitional`] (k-means or otherwise), and
//! [`StratifiedClusterer`] orchestrates one fit per stratum and remaps local
//! labels into globally unique identifiers at prediction time.

#![forbid(unsafe_code)]

pub mod error;
pub mod stratified;

pub use error::{Error, Result};
pub use stratified::{Boundaries, FitPartitional, PartitionalModel, StratifiedClusterer};
