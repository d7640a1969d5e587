use shared::{Error, KeyValueStore, Registry, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage` behind the shared storage trait.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::storage("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| Error::storage(js_error(&e)))?
            .ok_or_else(|| Error::storage("localStorage is disabled"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|e| Error::storage(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(|e| Error::storage(js_error(&e)))
    }

    fn clear(&self) -> Result<()> {
        self.storage.clear().map_err(|e| Error::storage(js_error(&e)))
    }
}

pub fn registry() -> Result<Registry<LocalStore>> {
    LocalStore::open().map(Registry::new)
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
