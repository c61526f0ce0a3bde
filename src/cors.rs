use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Build a CORS layer for the issue API with the given allowed origins.
///
/// An origin is allowed when it equals a configured entry or extends it with
/// a port (`http://localhost` admits `http://localhost:5173`).
/// Pass "*" in the origins list to allow all origins (not recommended for production).
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }
            origin
                .to_str()
                .is_ok_and(|origin_str| is_origin_allowed(origin_str, &cors_origins))
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
}

fn is_origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|entry| {
        origin
            .strip_prefix(entry.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
}

/// Split, trim and drop empty entries from configured origins.
#[must_use]
pub fn normalize_origins(origins: &[String]) -> Vec<String> {
    origins
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
