//! `localStorage`-backed preference store implementation.

use platform_host::{PrefsError, PrefsStore};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(PrefsError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn backend_error(op: &'static str, key: &str, err: wasm_bindgen::JsValue) -> PrefsError {
    PrefsError::Backend {
        op,
        key: key.to_string(),
        message: format!("{err:?}"),
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| backend_error("get_item", key, err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|err| backend_error("set_item", key, err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Err(PrefsError::Unavailable)
        }
    }

    fn delete(&self, key: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| backend_error("remove_item", key, err))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }
}
