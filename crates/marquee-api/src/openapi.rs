//! `OpenAPI` (3.x) specification generation for `marquee-api`.
//!
//! The spec is served at `/openapi.json` and can be used to generate
//! external clients.

use utoipa::OpenApi;

/// `OpenAPI` documentation for the Marquee REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee API",
        version = "0.1.0",
        description = "Read-only movie awards registry REST API"
    ),
    paths(
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::awards_interval_by_producer,
    ),
    components(
        schemas(
            crate::error::ApiErrorBody,
            crate::routes::movies::LookupResponse,
            crate::routes::movies::MovieResponse,
            crate::routes::movies::ListMoviesResponse,
            crate::routes::movies::IntervalRecordResponse,
            crate::routes::movies::AwardsIntervalResponse,
        )
    ),
    tags(
        (name = "movies", description = "Movie registry operations"),
    )
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}
