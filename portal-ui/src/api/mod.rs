//! Browser HTTP access
//!
//! `gloo-net` transport for the core API client and the stored API base
//! URL override.

mod transport;

pub use transport::GlooTransport;

use hospital_portal::DEFAULT_API_BASE;

/// Local storage key holding an API base URL override
const API_URL_KEY: &str = "hospital_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_api_base_override() {
        storage().remove_item(API_URL_KEY).unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_BASE);

        storage().set_item(API_URL_KEY, "http://api.test/").unwrap();
        assert_eq!(get_api_base(), "http://api.test");

        storage().set_item(API_URL_KEY, "  ").unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_BASE);

        storage().remove_item(API_URL_KEY).unwrap();
    }
}
