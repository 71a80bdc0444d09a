use axum::http::{
    HeaderName, HeaderValue,
    header::{CACHE_CONTROL, EXPIRES, PRAGMA},
};

pub const DEFAULT_SHARED_MAX_AGE_SECS: u64 = 300;

/// `Cache-Control` letting a shared cache (CDN) keep a listing for `max_age_secs`
pub fn shared_cache_control(max_age_secs: u64) -> HeaderValue {
    let max_age_secs = if max_age_secs == 0 {
        DEFAULT_SHARED_MAX_AGE_SECS
    } else {
        max_age_secs
    };
    HeaderValue::from_str(&format!("public, s-maxage={max_age_secs}, stale-while-revalidate"))
        .unwrap_or(HeaderValue::from_static("public, s-maxage=300, stale-while-revalidate"))
}

pub fn shared_cache_headers(cache_control: &HeaderValue) -> [(HeaderName, HeaderValue); 1] {
    [(CACHE_CONTROL, cache_control.clone())]
}

pub fn no_cache_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store, must-revalidate")),
        (PRAGMA, HeaderValue::from_static("no-cache")),
        (EXPIRES, HeaderValue::from_static("0")),
    ]
}
