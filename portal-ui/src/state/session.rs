//! `localStorage`-backed session store

use hospital_portal::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!(key, error = ?e, "Failed to write local storage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, error = ?e, "Failed to clear local storage");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_portal::{Role, Session};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_set_get_remove() {
        let store = LocalStorageStore;
        store.set("portal-test", "admin");
        assert_eq!(store.get("portal-test").as_deref(), Some("admin"));

        store.remove("portal-test");
        assert_eq!(store.get("portal-test"), None);
    }

    #[wasm_bindgen_test]
    fn test_session_survives_new_handle() {
        Session::new(LocalStorageStore)
            .login(Role::Doctor, Some("dtok"))
            .unwrap();

        let session = Session::new(LocalStorageStore);
        assert_eq!(session.role(), Some(Role::Doctor));
        assert_eq!(session.token().as_deref(), Some("dtok"));

        session.logout();
        assert_eq!(Session::new(LocalStorageStore).role(), None);
    }
}
