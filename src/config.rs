//! Configuration from environment variables (port, CORS origins).

use std::{env, net::{Ipv4Addr, SocketAddr}};

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

/// Local dev client plus the hosted client.
const DEFAULT_ORIGINS: &str =
    "http://localhost:5173,https://connect4-client-anugraha-ss-projects.vercel.app";

/// Socket address to bind the server to.
///
/// Reads the `PORT` env var or defaults to 3000, binds to 0.0.0.0.
pub fn server_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, parse_port(env::var("PORT").ok().as_deref())))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok()).unwrap_or(DEFAULT_PORT)
}

/// CORS policy for browser clients served from another origin.
///
/// `CORS_ORIGINS` is a comma separated list; `*` allows any origin. Set it
/// for any deployment whose client is served from an origin other than the
/// defaults, e.g. `CORS_ORIGINS=https://play.example.com`.
pub fn cors() -> CorsLayer {
    cors_from(env::var("CORS_ORIGINS").ok().as_deref())
}

pub fn cors_from(raw: Option<&str>) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origins(raw.unwrap_or(DEFAULT_ORIGINS)))
}

fn allowed_origins(raw: &str) -> AllowOrigin {
    if raw.split(',').any(|o| o.trim() == "*") {
        return Any.into();
    }
    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        // Browsers send the origin without a trailing slash.
        .map(|o| o.trim_end_matches('/'))
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}
