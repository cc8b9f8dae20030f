//! plugview - search-result previews for plugin registries.
//!
//! An external search engine decides which plugins match a query and hands
//! back, per plugin, the matched word and its character offsets in each
//! field. This library turns those records into terminal result cards:
//! short fields are highlighted in place, and the long description is cut
//! down to a bounded context window around the match before highlighting.
//!
//! # Modules
//!
//! - [`commands`] - High-level operations behind the CLI
//! - [`snippet`] - Context-window extraction around a match
//! - [`highlight`] - ANSI marking of matched words
//! - [`render`] - Result-card assembly
//! - [`registry`] - Plugin record and index types
//! - [`search`] - Match types consumed from the search engine
//! - [`config`] - Configuration loading
//! - [`cli`] - Command-line interface definitions

pub mod cli;
pub mod commands;
pub mod config;
pub mod highlight;
pub mod registry;
pub mod render;
pub mod search;
pub mod snippet;
