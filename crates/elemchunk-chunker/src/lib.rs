//! Chunking strategies and strategy dispatch for elemchunk.
//!
//! [`Dispatcher::chunk`] resolves a strategy name through a shared
//! [`ChunkerRegistry`], narrows the caller's options to those the strategy
//! declares, and runs it. Two strategies are built in:
//!
//! | Name | Chunker |
//! |------|---------|
//! | `basic` | [`BasicChunker`] |
//! | `by_title` | [`TitleChunker`] |
//!
//! Further strategies are added with [`Dispatcher::register_chunking_strategy`].

mod base;
pub mod basic;
pub mod config;
pub mod dispatch;
pub mod registry;
pub mod spec;
pub mod title;

pub use base::{ChunkingOptions, DEFAULT_MAX_CHARACTERS};
pub use basic::BasicChunker;
pub use config::ChunkingConfig;
pub use dispatch::Dispatcher;
pub use registry::ChunkerRegistry;
pub use spec::ChunkerSpec;
pub use title::TitleChunker;
