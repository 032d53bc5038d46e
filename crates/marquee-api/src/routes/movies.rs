//! Movie API routes.
//!
//! Read-only operations over the movie registry.
//!
//! ## Routes
//!
//! - `GET /movies/` - Paginated movie list, with optional title search
//! - `GET /movies/{id}/` - Movie detail
//! - `GET /movies/awards-interval-by-producer/` - Producer win-interval extremes
//!
//! Non-GET methods on these paths are rejected with 405.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use marquee_core::awards::{self, AwardInterval, AwardIntervalExtremes};
use marquee_core::model::{Movie, MovieId};
use marquee_core::registry::MovieRegistry;

use crate::config::MAX_PAGE_SIZE;
use crate::error::{ApiError, ApiErrorBody};
use crate::server::AppState;

/// Query parameters for listing movies.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesQuery {
    /// 1-based page number (default 1).
    pub page: Option<usize>,
    /// Movies per page (default from server config, at most 100).
    pub page_size: Option<usize>,
    /// Case-insensitive substring filter on the title.
    pub search: Option<String>,
}

/// A related producer or studio.
#[derive(Debug, Serialize, ToSchema)]
pub struct LookupResponse {
    /// Identity of the related entity.
    pub id: u64,
    /// Name of the related entity.
    pub name: String,
}

/// Movie response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    /// Movie ID.
    pub id: MovieId,
    /// Release year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Whether this movie won the Worst Picture designation.
    pub winner: bool,
    /// Associated studios.
    pub studios: Vec<LookupResponse>,
    /// Associated producers.
    pub producers: Vec<LookupResponse>,
}

/// Paginated movie list response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesResponse {
    /// Movies on this page, ordered by year ascending.
    pub movies: Vec<MovieResponse>,
    /// Total number of movies matching the request.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    /// Movies per page.
    pub page_size: usize,
}

/// One interval between two consecutive wins of the same producer.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecordResponse {
    /// Name of the producer.
    pub producer: String,
    /// Years between the two wins.
    pub interval: i32,
    /// Year of the earlier win.
    pub previous_win: i32,
    /// Year of the later win.
    pub following_win: i32,
}

impl From<AwardInterval> for IntervalRecordResponse {
    fn from(value: AwardInterval) -> Self {
        Self {
            producer: value.producer,
            interval: value.interval,
            previous_win: value.previous_win,
            following_win: value.following_win,
        }
    }
}

/// Producers with the minimum and maximum win intervals, ties included.
#[derive(Debug, Serialize, ToSchema)]
pub struct AwardsIntervalResponse {
    /// All interval records equal to the global minimum.
    pub min: Vec<IntervalRecordResponse>,
    /// All interval records equal to the global maximum.
    pub max: Vec<IntervalRecordResponse>,
}

impl From<AwardIntervalExtremes> for AwardsIntervalResponse {
    fn from(value: AwardIntervalExtremes) -> Self {
        Self {
            min: value.min.into_iter().map(Into::into).collect(),
            max: value.max.into_iter().map(Into::into).collect(),
        }
    }
}

/// Creates movie routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies/", get(list_movies))
        .route(
            "/movies/awards-interval-by-producer/",
            get(awards_interval_by_producer),
        )
        .route("/movies/:id/", get(get_movie))
}

/// List movies.
///
/// GET /movies/
#[utoipa::path(
    get,
    path = "/movies/",
    tag = "movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Movies listed", body = ListMoviesResponse),
        (status = 400, description = "Bad request", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListMoviesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (page, page_size) = parse_pagination(&query, state.config.page_size)?;

    tracing::debug!(page, page_size, search = ?query.search, "Listing movies");

    let registry = state.registry();
    let matched = match query.search.as_deref() {
        Some(term) => registry.search_by_title(term),
        None => registry.movies_by_year(),
    };
    let total = matched.len();

    let movies = matched
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .map(|movie| movie_response(registry, movie))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ListMoviesResponse {
        movies,
        total,
        page,
        page_size,
    }))
}

/// Get a movie by id.
///
/// GET /movies/{id}/
#[utoipa::path(
    get,
    path = "/movies/{id}/",
    tag = "movies",
    params(
        ("id" = u64, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Not found", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MovieId>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!(movie_id = id, "Getting movie");

    let registry = state.registry();
    let movie = registry
        .movie(id)
        .ok_or_else(|| ApiError::not_found(format!("movie not found: {id}")))?;

    Ok(Json(movie_response(registry, movie)?))
}

/// Producer award interval extremes.
///
/// GET /movies/awards-interval-by-producer/
#[utoipa::path(
    get,
    path = "/movies/awards-interval-by-producer/",
    tag = "movies",
    responses(
        (status = 200, description = "Interval extremes computed", body = AwardsIntervalResponse),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn awards_interval_by_producer(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!("Computing award interval extremes");

    let extremes = awards::award_interval_extremes(state.registry());
    Ok(Json(AwardsIntervalResponse::from(extremes)))
}

fn parse_pagination(query: &ListMoviesQuery, default_page_size: usize) -> Result<(usize, usize), ApiError> {
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::bad_request("page must be at least 1"));
    }

    let page_size = query.page_size.unwrap_or(default_page_size);
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ApiError::bad_request(format!(
            "pageSize must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    Ok((page, page_size))
}

fn movie_response(registry: &MovieRegistry, movie: &Movie) -> Result<MovieResponse, ApiError> {
    let studios = movie
        .studio_ids
        .iter()
        .map(|&id| {
            registry
                .studio(id)
                .map(|studio| LookupResponse {
                    id: studio.id,
                    name: studio.name.clone(),
                })
                .ok_or_else(|| {
                    ApiError::internal(format!("movie {} references unknown studio {id}", movie.id))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let producers = movie
        .producer_ids
        .iter()
        .map(|&id| {
            registry
                .producer(id)
                .map(|producer| LookupResponse {
                    id: producer.id,
                    name: producer.name.clone(),
                })
                .ok_or_else(|| {
                    ApiError::internal(format!(
                        "movie {} references unknown producer {id}",
                        movie.id
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MovieResponse {
        id: movie.id,
        year: movie.year,
        title: movie.title.clone(),
        winner: movie.winner,
        studios,
        producers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_page() {
        let query = ListMoviesQuery::default();
        let (page, page_size) = parse_pagination(&query, 10).unwrap();
        assert_eq!(page, 1);
        assert_eq!(page_size, 10);
    }

    #[test]
    fn page_zero_is_rejected() {
        let query = ListMoviesQuery {
            page: Some(0),
            ..ListMoviesQuery::default()
        };
        let error = parse_pagination(&query, 10).unwrap_err();
        assert_eq!(error.code(), "BAD_REQUEST");
    }

    #[test]
    fn oversized_page_size_is_rejected() {
        let query = ListMoviesQuery {
            page_size: Some(MAX_PAGE_SIZE + 1),
            ..ListMoviesQuery::default()
        };
        let error = parse_pagination(&query, 10).unwrap_err();
        assert_eq!(error.code(), "BAD_REQUEST");
    }

    #[test]
    fn page_size_override_is_honored() {
        let query = ListMoviesQuery {
            page_size: Some(25),
            ..ListMoviesQuery::default()
        };
        let (_, page_size) = parse_pagination(&query, 10).unwrap();
        assert_eq!(page_size, 25);
    }
}
