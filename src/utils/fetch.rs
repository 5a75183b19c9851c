//! Torrent page lookups for the link resolver.
//!
//! A trigger click keeps the busy cursor up until its lookup settles, so
//! every request is bounded by [`FETCH_TIMEOUT_MS`]. The body is parsed
//! off-screen with `DOMParser` and searched by selector.

use js_sys::{Array, Promise};
use leetx_core::error::FetchError;
use leetx_core::link::{DocumentFetcher, FetchedDocument};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DomParser, Request, RequestInit, RequestMode, Response, SupportedType};

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Bounded Requests
// =============================================================================

/// Await `request`, giving up with [`FetchError::Timeout`] after
/// `timeout_ms`.
///
/// The deadline is a second promise resolving to `undefined`; whichever
/// settles first under `Promise.race` wins. A rejection is a network error.
async fn within_deadline(request: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let deadline = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&request, &deadline);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(settled) if settled.is_undefined() => Err(FetchError::Timeout),
        Ok(settled) => Ok(settled),
        Err(reason) => Err(FetchError::NetworkError(
            reason.as_string().unwrap_or_else(|| format!("{reason:?}")),
        )),
    }
}

/// GET a torrent page and return its HTML.
///
/// A non-2xx status is reported as [`FetchError::HttpError`] without reading
/// the body. The link resolver treats that as a page with no link on it.
async fn fetch_page_html(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = within_deadline(window.fetch_with_request(&request), FETCH_TIMEOUT_MS)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::ResponseReadFailed)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .ok()
        .and_then(|text| text.as_string())
        .ok_or(FetchError::ResponseReadFailed)
}

// =============================================================================
// Port Adapters
// =============================================================================

/// A page parsed off-screen with `DOMParser`.
pub struct ParsedPage(Document);

impl FetchedDocument for ParsedPage {
    fn find_first_href(&self, selector: &str) -> Option<String> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()?
            .get_attribute("href")
    }
}

/// [`DocumentFetcher`] over the browser Fetch API.
pub struct BrowserFetcher;

impl DocumentFetcher for BrowserFetcher {
    type Document = ParsedPage;

    async fn fetch(&self, url: &str) -> Result<ParsedPage, FetchError> {
        let html = fetch_page_html(url).await?;
        let parser = DomParser::new().map_err(|_| FetchError::ParseFailed)?;
        parser
            .parse_from_string(&html, SupportedType::TextHtml)
            .map(ParsedPage)
            .map_err(|_| FetchError::ParseFailed)
    }
}
