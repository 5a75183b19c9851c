//! Magnet and direct-download link resolution.
//!
//! Trigger cells carry the torrent page URL as data. A click becomes a
//! [`ResolveLink`] command handled by [`LinkHandler`]: fetch the torrent page,
//! find the wanted link, navigate to it. Browser specifics stay behind the
//! [`DocumentFetcher`], [`FetchedDocument`] and [`LinkUi`] ports.

use url::Url;

use crate::config::{links, table};
use crate::error::{FetchError, LinkError};

/// Which link a trigger looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Magnet,
    DirectDownload,
}

impl LinkKind {
    /// Selector searched in the fetched torrent page.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Magnet => links::MAGNET,
            Self::DirectDownload => links::DIRECT_DOWNLOAD,
        }
    }

    /// Name used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Magnet => "magnet",
            Self::DirectDownload => "direct download",
        }
    }

    fn trigger(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Magnet => table::MAGNET_TRIGGER,
            Self::DirectDownload => table::DOWNLOAD_TRIGGER,
        }
    }

    /// Class of the trigger anchor in the injected cell.
    pub fn trigger_class(self) -> &'static str {
        self.trigger().0
    }

    /// Icon class rendered inside the trigger.
    pub fn icon_class(self) -> &'static str {
        self.trigger().1
    }

    /// Tooltip of the trigger.
    pub fn title(self) -> &'static str {
        self.trigger().2
    }

    /// Kind for a clicked element's class name, if it is a trigger.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        [Self::Magnet, Self::DirectDownload]
            .into_iter()
            .find(|kind| class_name.split_whitespace().any(|c| c == kind.trigger_class()))
    }
}

/// Command emitted by a trigger click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveLink {
    pub kind: LinkKind,
    /// Torrent page to fetch.
    pub href: String,
}

/// A parsed page that can be searched by CSS selector.
pub trait FetchedDocument {
    /// Raw `href` attribute of the first element matching `selector`.
    fn find_first_href(&self, selector: &str) -> Option<String>;
}

/// Fetches and parses a page.
#[allow(async_fn_in_trait)]
pub trait DocumentFetcher {
    type Document: FetchedDocument;

    async fn fetch(&self, url: &str) -> Result<Self::Document, FetchError>;
}

/// User-visible side effects of a link lookup.
pub trait LinkUi {
    /// Show or clear the busy cursor.
    fn set_busy(&self, busy: bool);

    fn navigate(&self, url: &str);

    /// Blocking notification, e.g. `alert()`.
    fn notify(&self, message: &str);
}

/// Find the link a command asks for and return its absolute `https` URL.
///
/// An HTTP error status still counts as a fetched page, just one without the
/// link (1337x answers with challenge pages), so it ends as
/// [`LinkError::LinkNotFound`]. Only network, read and parse failures become
/// [`LinkError::FetchFailed`].
pub async fn resolve_link<F: DocumentFetcher>(
    fetcher: &F,
    command: &ResolveLink,
) -> Result<String, LinkError> {
    let document = fetcher
        .fetch(&command.href)
        .await
        .map_err(|source| match source {
            FetchError::HttpError(_) => LinkError::LinkNotFound(command.kind),
            source => LinkError::FetchFailed {
                kind: command.kind,
                source,
            },
        })?;

    let href = document
        .find_first_href(command.kind.selector())
        .ok_or(LinkError::LinkNotFound(command.kind))?;

    Ok(force_https(&absolutize(&command.href, href.trim())))
}

/// Resolve `href` against `base` unless it is already absolute.
fn absolutize(base: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

/// Upgrade a plain `http:` URL to `https:`; anything else is returned as is.
pub fn force_https(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}

/// Single handler for every trigger click.
pub struct LinkHandler<F, U> {
    fetcher: F,
    ui: U,
}

impl<F: DocumentFetcher, U: LinkUi> LinkHandler<F, U> {
    pub fn new(fetcher: F, ui: U) -> Self {
        Self { fetcher, ui }
    }

    /// Run one command.
    ///
    /// The busy cursor is shown for the duration of the lookup and cleared
    /// whatever the outcome. A missing link, including an HTTP error page, is
    /// reported through [`LinkUi::notify`]. Network and parse failures are
    /// returned for logging only.
    pub async fn handle(&self, command: &ResolveLink) -> Result<String, LinkError> {
        self.ui.set_busy(true);
        let result = resolve_link(&self.fetcher, command).await;
        self.ui.set_busy(false);

        match &result {
            Ok(url) => self.ui.navigate(url),
            Err(err @ LinkError::LinkNotFound(_)) => self.ui.notify(&err.to_string()),
            Err(LinkError::FetchFailed { .. }) => {}
        }
        result
    }
}
