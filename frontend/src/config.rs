use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__PORTAL_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__PORTAL_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .and_then(|v| v.as_string())
        .filter(|v| !v.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

/// Base URL of the REST API, resolved once per page load.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            get_from_env_js()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        })
        .clone()
}

/// Origin that serves uploaded assets: the API base without its `/api` suffix.
pub fn asset_origin(api_base_url: &str) -> String {
    let trimmed = api_base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string()
}

/// Resolves a stored asset path (e.g. `/uploads/a.png`) against the asset origin.
/// Absolute and `data:` URLs pass through unchanged.
pub fn asset_url_with_base(api_base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return path.to_string();
    }
    let origin = asset_origin(api_base_url);
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

pub fn asset_url(path: &str) -> String {
    asset_url_with_base(&api_base_url(), path)
}
