use std::ops::Deref;

use gloo::console::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use yew::prelude::*;

use crate::storage::{BrowserStore, KeyValueStore};

/// State that is read from and written through to `localStorage`.
pub struct StoredHandle<T> {
    key: &'static str,
    inner: UseStateHandle<T>,
}

impl<T: Serialize> StoredHandle<T> {
    pub fn set(&self, value: T) {
        if let Err(e) = BrowserStore.save(self.key, &value) {
            warn!(format!("Could not persist {}: {e}", self.key));
        }
        self.inner.set(value);
    }
}

impl<T> Clone for StoredHandle<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            inner: self.inner.clone(),
        }
    }
}

impl<T> Deref for StoredHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: PartialEq> PartialEq for StoredHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && *self.inner == *other.inner
    }
}

/// Like `use_state`, but seeded from storage under `key` and saved back on
/// every `set`. `init` supplies the value when nothing usable is stored.
#[hook]
pub fn use_stored_state<T, F>(key: &'static str, init: F) -> StoredHandle<T>
where
    T: Serialize + DeserializeOwned + 'static,
    F: FnOnce() -> T,
{
    let inner = use_state(move || BrowserStore.load(key).unwrap_or_else(init));
    StoredHandle { key, inner }
}

/// Bind an `<input>` or `<textarea>` to a string handle.
pub fn bind_text(handle: StoredHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| handle.set(input_value(&e)))
}

pub fn input_value(e: &InputEvent) -> String {
    use wasm_bindgen::JsCast;
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    target
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Update one field of a draft held in `state` from an input event.
pub fn setter<T: 'static>(state: &UseStateHandle<T>, f: fn(&mut T, String)) -> Callback<InputEvent>
where
    T: Clone,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        f(&mut next, input_value(&e));
        state.set(next);
    })
}
