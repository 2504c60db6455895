//! Process-wide memoizing factory for client handles.
//!
//! Avoids rebuilding a client on every invocation with identical settings.
//! The cache has no correctness impact: rebuilding a handle from the same
//! configuration is always safe and idempotent, since handles are stateless
//! aside from connection config.

use crate::config::{ClientConfig, HandleKey};
use crate::openai::OpenAiClient;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};
use tracing::debug;

static HANDLES: LazyLock<Mutex<HashMap<HandleKey, Arc<OpenAiClient>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the cached client handle for this configuration, building one on
/// first use.
///
/// Keyed by (temperature bits, SHA-256 of the credential, model, base URL).
pub fn completion_handle(config: &ClientConfig) -> Arc<OpenAiClient> {
    let key = config.cache_key();
    let mut handles = HANDLES.lock().expect("handle cache poisoned");

    if let Some(handle) = handles.get(&key) {
        return Arc::clone(handle);
    }

    debug!(model = %config.model(), "Building new client handle");
    let handle = Arc::new(OpenAiClient::new(config.clone()));
    handles.insert(key, Arc::clone(&handle));
    handle
}
