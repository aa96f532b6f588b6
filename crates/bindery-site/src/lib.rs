//! Workshop site assembly.
//!
//! This crate turns a configured workshop tree — sections of authored
//! notebooks and markdown pages — into a published static site: worksheets,
//! answer keys, data bundles, slide embeds, copied assets, and an index
//! page tying it all together.
//!
//! # Modules
//!
//! - [`config`]: `workshop-config.yaml` loading and section resolution
//! - [`archive`]: data bundle (zip) creation from glob patterns
//! - [`assets`]: copying referenced local files into the output tree
//! - [`slides`]: slide deck copying, thumbnails, and embed markup
//! - [`item`]: the published-item record the index renders from
//! - [`process`]: per-item processing for notebooks and pages
//! - [`index`]: index page rendering
//! - [`pipeline`]: the full publish run

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod assets;
pub mod config;
pub mod index;
pub mod item;
pub mod pipeline;
pub mod process;
pub mod slides;

pub use config::{SectionSpec, WorkshopConfig, load_config};
pub use item::{ItemKind, ItemRecord};
pub use pipeline::{PublishStats, publish};
