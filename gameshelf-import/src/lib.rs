//! Import pipeline.
//!
//! Orchestrates a library import: fetch the owned-games list from a
//! [`LibraryProvider`], match each title against a [`CatalogSearch`]
//! backend with caching and rate-limit pacing, and stream progress
//! events to a [`ProgressSink`] while the caller awaits the enriched
//! result.

mod cache;
mod pacer;
mod pipeline;
mod progress;
pub mod sources;

pub use cache::MatchCache;
pub use pacer::{FixedPacer, NoopPacer, Pacer};
pub use pipeline::{
    run_import, CatalogSearch, ImportError, ImportOptions, LibraryProvider, BATCH_SIZE,
};
pub use progress::{ChannelSink, ImportEvent, ImportStage, LogSink, ProgressSink, SilentSink};
