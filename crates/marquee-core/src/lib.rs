//! # marquee-core
//!
//! Core domain layer for the Marquee movie awards registry.
//!
//! This crate provides everything below the HTTP surface:
//!
//! - **Domain Model**: `Movie`, `Producer`, `Studio` and their id types
//! - **Registry Store**: in-memory store with name-deduplicated lookups
//! - **Award Engine**: consecutive-win interval computation per producer
//! - **Seed Loader**: one-shot bootstrap from a delimited seed file
//! - **Error Types**: shared error definitions and result types
//!
//! ## Crate Boundary
//!
//! `marquee-core` holds all domain policy. The API crate on top of it is a
//! thin composition layer that maps registry reads to HTTP responses.
//!
//! ## Example
//!
//! ```rust
//! use marquee_core::prelude::*;
//!
//! let mut registry = MovieRegistry::new();
//! let producer = registry.get_or_create_producer("Producer A")?;
//! let studio = registry.get_or_create_studio("Studio A")?;
//!
//! registry.insert_movie(NewMovie {
//!     year: 1990,
//!     title: "First Feature".to_string(),
//!     winner: true,
//!     studio_ids: vec![studio],
//!     producer_ids: vec![producer],
//! })?;
//!
//! assert_eq!(registry.movie_count(), 1);
//! # Ok::<(), marquee_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod awards;
pub mod error;
pub mod model;
pub mod observability;
pub mod registry;
pub mod seed;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::awards::{award_interval_extremes, AwardInterval, AwardIntervalExtremes};
    pub use crate::error::{Error, Result};
    pub use crate::model::{Movie, MovieId, NewMovie, Producer, ProducerId, Studio, StudioId};
    pub use crate::registry::MovieRegistry;
}
