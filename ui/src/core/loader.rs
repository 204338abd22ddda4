//! One-shot loading of the exported `results.json` document.
//!
//! The web build issues a single `fetch` with the HTTP cache disabled; native
//! builds read the file from disk. Both paths end in [`decode_response`] or
//! [`decode_document`], so failure classification is shared. Nothing here
//! retries.

use thiserror::Error;

use crate::results::RawResultsDocument;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("results request failed with HTTP status {0}")]
    Status(u16),
    #[error("results request failed: {0}")]
    Network(String),
    #[error("results document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("couldn't read results file: {0}")]
    Io(#[from] std::io::Error),
}

/// Decide on a finished HTTP exchange: non-2xx is a failure, otherwise the body must parse.
pub fn decode_response(status: u16, body: &str) -> Result<RawResultsDocument, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    decode_document(body)
}

pub fn decode_document(body: &str) -> Result<RawResultsDocument, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Load the document from `source` (URL on the web, path on native).
pub async fn load_results(source: &str) -> Result<RawResultsDocument, LoadError> {
    tracing::debug!(source, "loading results document");
    imp::load(source).await
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCache, RequestInit, Response};

    use super::{decode_response, LoadError};
    use crate::results::RawResultsDocument;

    pub(super) async fn load(url: &str) -> Result<RawResultsDocument, LoadError> {
        let window =
            web_sys::window().ok_or_else(|| LoadError::Network("no window available".into()))?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_cache(RequestCache::NoStore);
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;

        let response: Response = await_promise(window.fetch_with_request(&request))
            .await?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        if !response.ok() {
            return Err(LoadError::Status(status));
        }

        let text = await_promise(response.text().map_err(js_error)?).await?;
        let body = text.as_string().unwrap_or_default();
        decode_response(status, &body)
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, LoadError> {
        JsFuture::from(promise).await.map_err(js_error)
    }

    fn js_error(value: JsValue) -> LoadError {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        LoadError::Network(message)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::{decode_document, LoadError};
    use crate::results::RawResultsDocument;

    pub(super) async fn load(path: &str) -> Result<RawResultsDocument, LoadError> {
        let body = tokio::fs::read_to_string(path).await?;
        decode_document(&body)
    }
}
