//! Server-side access to the loaded blog library.

use std::sync::{Arc, OnceLock};

use leptos::prelude::ServerFnError;
use mxnan_core::BlogSource;

static LIBRARY: OnceLock<Arc<dyn BlogSource>> = OnceLock::new();

/// Install the library used by server functions.
///
/// Returns `false` when a library was already installed; the first one stays.
pub fn install(source: Arc<dyn BlogSource>) -> bool {
    LIBRARY.set(source).is_ok()
}

pub fn library() -> Result<Arc<dyn BlogSource>, ServerFnError> {
    LIBRARY
        .get()
        .cloned()
        .ok_or_else(|| ServerFnError::new("blog library is not loaded"))
}
