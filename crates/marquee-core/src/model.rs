//! Domain types for the movie awards registry.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie.
pub type MovieId = u64;

/// Unique identifier for a producer.
pub type ProducerId = u64;

/// Unique identifier for a studio.
pub type StudioId = u64;

/// Maximum length for titles and names, matching the registry's column width.
pub const MAX_NAME_LEN: usize = 255;

/// Earliest release year the registry accepts.
pub const MIN_YEAR: i32 = 1888;

/// Latest release year the registry accepts.
pub const MAX_YEAR: i32 = 2200;

/// A movie registered in the system.
///
/// Relations to producers and studios are symmetric id sets: the movie holds
/// sorted, deduplicated ids, and the registry resolves them on read. Movies
/// are immutable once inserted; there are no update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Registry-assigned identity.
    pub id: MovieId,
    /// Release year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Whether this movie won the Worst Picture designation.
    pub winner: bool,
    /// Studios associated with this movie (sorted, deduplicated).
    pub studio_ids: Vec<StudioId>,
    /// Producers associated with this movie (sorted, deduplicated).
    pub producer_ids: Vec<ProducerId>,
}

/// A movie producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producer {
    /// Registry-assigned identity.
    pub id: ProducerId,
    /// Producer name (unique within the registry).
    pub name: String,
}

/// A movie studio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    /// Registry-assigned identity.
    pub id: StudioId,
    /// Studio name (unique within the registry).
    pub name: String,
}

/// Input for inserting a movie into the registry.
///
/// The registry validates the fields, assigns the id, and normalizes the
/// relation sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    /// Release year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Whether this movie won the Worst Picture designation.
    pub winner: bool,
    /// Studios associated with this movie.
    pub studio_ids: Vec<StudioId>,
    /// Producers associated with this movie.
    pub producer_ids: Vec<ProducerId>,
}
