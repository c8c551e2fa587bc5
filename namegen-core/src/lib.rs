//! Word-segmentation based name generation library.
//!
//! This crate provides a modular name generation system including:
//! - A rule library that decides where a word should be cut
//! - A partitioner that turns words into ordered letter groups
//! - A term-level chain model that learns group transitions and samples new candidates
//! - A driver that feeds whole corpora into the chain, in parallel
//!
//! Words go in one per line, get cut into groups by a configurable rule and
//! split position, and the chain learns which groups follow which. Sampling
//! the chain then produces letter sequences that were never in the corpus.

/// Word segmentation: alphabet classes, split rules and the partitioner.
pub mod split;

/// Term-chain model: transition statistics and candidate sampling.
pub mod model;

/// Segmentation driver: corpus-to-chain orchestration and caching.
pub mod trainer;

/// I/O utilities (corpus loading, word filtering, sidecar paths).
pub mod io;

/// Error types shared across the crate.
pub mod error;
