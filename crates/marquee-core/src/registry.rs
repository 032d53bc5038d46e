//! In-memory registry store for movies, producers, and studios.
//!
//! The registry is populated once at startup (see [`crate::seed`]) and read
//! concurrently behind an `Arc` afterwards. All mutation happens before the
//! registry is shared, so reads need no coordination.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::model::{
    Movie, MovieId, NewMovie, Producer, ProducerId, Studio, StudioId, MAX_NAME_LEN, MAX_YEAR,
    MIN_YEAR,
};

/// The in-memory data store.
///
/// Producers and studios are deduplicated by exact name; movies reference
/// them through sorted id sets. Listing order is year ascending with the
/// registry id as a stable tiebreak.
#[derive(Debug, Default)]
pub struct MovieRegistry {
    movies: BTreeMap<MovieId, Movie>,
    producers: BTreeMap<ProducerId, Producer>,
    studios: BTreeMap<StudioId, Studio>,
    producer_ids_by_name: HashMap<String, ProducerId>,
    studio_ids_by_name: HashMap<String, StudioId>,
}

impl MovieRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no movies have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Returns the number of registered movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Returns the producer with the given id, if any.
    #[must_use]
    pub fn producer(&self, id: ProducerId) -> Option<&Producer> {
        self.producers.get(&id)
    }

    /// Returns the studio with the given id, if any.
    #[must_use]
    pub fn studio(&self, id: StudioId) -> Option<&Studio> {
        self.studios.get(&id)
    }

    /// Returns the movie with the given id, if any.
    #[must_use]
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Returns the producer with the given name, creating it if absent.
    ///
    /// Names are matched exactly after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is empty or longer than
    /// [`MAX_NAME_LEN`].
    pub fn get_or_create_producer(&mut self, name: &str) -> Result<ProducerId> {
        let name = validate_name("producer name", name)?;
        if let Some(&id) = self.producer_ids_by_name.get(&name) {
            return Ok(id);
        }
        let id = next_id(&self.producers);
        self.producer_ids_by_name.insert(name.clone(), id);
        self.producers.insert(id, Producer { id, name });
        Ok(id)
    }

    /// Returns the studio with the given name, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is empty or longer than
    /// [`MAX_NAME_LEN`].
    pub fn get_or_create_studio(&mut self, name: &str) -> Result<StudioId> {
        let name = validate_name("studio name", name)?;
        if let Some(&id) = self.studio_ids_by_name.get(&name) {
            return Ok(id);
        }
        let id = next_id(&self.studios);
        self.studio_ids_by_name.insert(name.clone(), id);
        self.studios.insert(id, Studio { id, name });
        Ok(id)
    }

    /// Inserts a movie and returns its assigned id.
    ///
    /// Relation id sets are deduplicated and sorted. Movies are immutable
    /// once inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the title is empty or oversized, the
    /// year lies outside [`MIN_YEAR`]..=[`MAX_YEAR`], or a relation id does
    /// not reference an existing producer or studio.
    pub fn insert_movie(&mut self, movie: NewMovie) -> Result<MovieId> {
        let title = validate_name("title", &movie.title)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&movie.year) {
            return Err(Error::validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR} (got {})",
                movie.year
            )));
        }

        let producer_ids = normalize_relation_ids(movie.producer_ids);
        for &id in &producer_ids {
            if !self.producers.contains_key(&id) {
                return Err(Error::validation(format!("unknown producer id {id}")));
            }
        }
        let studio_ids = normalize_relation_ids(movie.studio_ids);
        for &id in &studio_ids {
            if !self.studios.contains_key(&id) {
                return Err(Error::validation(format!("unknown studio id {id}")));
            }
        }

        let id = next_id(&self.movies);
        self.movies.insert(
            id,
            Movie {
                id,
                year: movie.year,
                title,
                winner: movie.winner,
                studio_ids,
                producer_ids,
            },
        );
        Ok(id)
    }

    /// Returns all movies ordered by year ascending, then id.
    #[must_use]
    pub fn movies_by_year(&self) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies.values().collect();
        movies.sort_by_key(|movie| (movie.year, movie.id));
        movies
    }

    /// Returns movies whose title contains `query`, case-insensitively.
    ///
    /// Results use the same ordering as [`Self::movies_by_year`].
    #[must_use]
    pub fn search_by_title(&self, query: &str) -> Vec<&Movie> {
        let needle = query.to_lowercase();
        let mut movies: Vec<&Movie> = self
            .movies
            .values()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect();
        movies.sort_by_key(|movie| (movie.year, movie.id));
        movies
    }

    /// Returns every (producer, year) association restricted to winning
    /// movies, in registry order.
    ///
    /// This is the input set of the award interval engine. A producer
    /// credited on several winning movies appears once per movie.
    #[must_use]
    pub fn winning_credits(&self) -> Vec<(&Producer, i32)> {
        self.movies
            .values()
            .filter(|movie| movie.winner)
            .flat_map(|movie| {
                movie
                    .producer_ids
                    .iter()
                    .filter_map(|id| self.producers.get(id))
                    .map(move |producer| (producer, movie.year))
            })
            .collect()
    }
}

/// Next identity for a `BTreeMap`-backed table: one past the highest key.
fn next_id<V>(table: &BTreeMap<u64, V>) -> u64 {
    table.keys().next_back().map_or(1, |last| last + 1)
}

fn normalize_relation_ids(mut ids: Vec<u64>) -> Vec<u64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn validate_name(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(Error::validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters (got {})",
            trimmed.len()
        )));
    }
    Ok(trimmed.to_string())
}
