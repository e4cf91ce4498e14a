//! Fragment loader: inlines `data-include` partials before the page boots.
//!
//! Placeholders are collected once in document order and fetched one at a
//! time, so a fragment can rely on every earlier fragment already being in
//! the DOM. Markup inserted by a fragment is not scanned for further
//! placeholders.
//!
//! ERROR HANDLING
//! ==============
//! A non-success response clears the placeholder so no loading state is left
//! behind; a transport failure leaves it untouched. Both are logged and the
//! loader moves on to the next fragment. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use std::future::Future;

use thiserror::Error;

#[cfg(feature = "hydrate")]
use crate::consts::FRAGMENT_ATTR;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FragmentError {
    /// The server answered with a non-2xx status.
    #[error("fragment responded with status {0}")]
    Status(u16),
    /// The request never produced a readable response.
    #[error("fragment request failed: {0}")]
    Network(String),
}

/// What to do with a placeholder once its fetch settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderAction {
    Replace(String),
    Clear,
    Leave,
}

impl PlaceholderAction {
    #[must_use]
    pub fn for_result(result: Result<String, FragmentError>) -> Self {
        match result {
            Ok(markup) => Self::Replace(markup),
            Err(FragmentError::Status(_)) => Self::Clear,
            Err(FragmentError::Network(_)) => Self::Leave,
        }
    }
}

/// An element waiting for its fragment.
pub trait Placeholder {
    /// Path of the fragment to inline, if the element names one.
    fn source(&self) -> Option<String>;

    /// Replace the element's content with `markup`.
    fn set_content(&self, markup: &str);
}

/// Fetches fragment markup by path.
pub trait FragmentSource {
    fn fetch(&self, src: &str) -> impl Future<Output = Result<String, FragmentError>>;
}

/// Outcome counts for one loader pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inlined: usize,
    pub cleared: usize,
    pub failed: usize,
    /// Placeholders with an empty source attribute.
    pub skipped: usize,
}

/// Fetch and inline every placeholder in order, awaiting each before the next.
pub async fn load_sequential<P: Placeholder, S: FragmentSource>(placeholders: &[P], source: &S) -> LoadReport {
    let mut report = LoadReport::default();
    for placeholder in placeholders {
        let Some(src) = placeholder.source().filter(|s| !s.is_empty()) else {
            report.skipped += 1;
            continue;
        };

        let result = source.fetch(&src).await;
        match &result {
            Err(e @ FragmentError::Status(_)) => log::warn!("failed to load fragment {src}: {e}"),
            Err(e @ FragmentError::Network(_)) => log::error!("error loading fragment {src}: {e}"),
            Ok(_) => {}
        }

        match PlaceholderAction::for_result(result) {
            PlaceholderAction::Replace(markup) => {
                placeholder.set_content(&markup);
                report.inlined += 1;
            }
            PlaceholderAction::Clear => {
                placeholder.set_content("");
                report.cleared += 1;
            }
            PlaceholderAction::Leave => report.failed += 1,
        }
    }
    report
}

/// Relative-URL `GET` through the browser's fetch.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl FragmentSource for HttpSource {
    async fn fetch(&self, src: &str) -> Result<String, FragmentError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(src)
                .send()
                .await
                .map_err(|e| FragmentError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(FragmentError::Status(resp.status()));
            }
            resp.text()
                .await
                .map_err(|e| FragmentError::Network(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = src;
            Err(FragmentError::Network("fetch unavailable outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
impl Placeholder for web_sys::Element {
    fn source(&self) -> Option<String> {
        self.get_attribute(FRAGMENT_ATTR)
    }

    fn set_content(&self, markup: &str) {
        self.set_inner_html(markup);
    }
}

/// Inline every `data-include` placeholder currently in `document`.
#[cfg(feature = "hydrate")]
pub async fn load_document(document: &web_sys::Document) -> LoadReport {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = document.query_selector_all(&format!("[{FRAGMENT_ATTR}]")) else {
        return LoadReport::default();
    };
    let placeholders = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect::<Vec<_>>();
    load_sequential(&placeholders, &HttpSource).await
}
