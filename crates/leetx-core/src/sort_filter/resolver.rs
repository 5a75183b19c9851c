//! Sort/filter request resolution.

use url::Url;

use super::{ParsedDescriptor, Side, SortFilterOption, SortFilterRequest, SortOrder};
use crate::error::SortFilterError;

/// Outcome of a request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The page already shows the requested sort/filter; nothing to do.
    AlreadySatisfied,
    /// Navigate to this path.
    Navigate(String),
}

/// Page accessor for the sort/filter widgets.
pub trait SortFilterPage {
    /// Options of the widget on `side`, in document order.
    fn options(&self, side: Side) -> Vec<SortFilterOption>;

    /// Current `location.href`.
    fn current_url(&self) -> String;

    /// Full page navigation.
    fn navigate(&self, url: &str);
}

/// Pick the target path for `request` among `options`.
pub fn resolve(
    request: &SortFilterRequest,
    options: &[SortFilterOption],
) -> Result<Resolution, SortFilterError> {
    let Some(first) = options.first() else {
        return Err(SortFilterError::NoOptionsFound { side: request.side });
    };

    let category = request.category.to_lowercase();
    let path = match request.side {
        Side::Right => {
            if shows_sort(first, &category, request.sort_order) {
                return Ok(Resolution::AlreadySatisfied);
            }
            find_sort_path(options, &category, request.sort_order)
        }
        Side::Left => {
            if first.is_selected && first.display_text.trim().to_lowercase() == category {
                return Ok(Resolution::AlreadySatisfied);
            }
            find_filter_path(options, &category)
        }
    };

    path.map(Resolution::Navigate)
        .ok_or_else(|| SortFilterError::NoMatchFound {
            category: request.category.clone(),
            side: request.side,
        })
}

/// Whether the sort widget's visible label already names the request.
fn shows_sort(first: &SortFilterOption, category: &str, order: Option<SortOrder>) -> bool {
    let text = first.display_text.to_lowercase();
    text.contains(category) && order.is_none_or(|o| text.contains(o.as_str()))
}

fn find_sort_path(
    options: &[SortFilterOption],
    category: &str,
    order: Option<SortOrder>,
) -> Option<String> {
    let candidates: Vec<(ParsedDescriptor, &str)> = options
        .iter()
        .filter_map(|option| {
            let raw = option.raw_value.as_deref()?;
            match option.descriptor()? {
                parsed @ ParsedDescriptor::Sort { .. } if parsed.has_category(category) => {
                    Some((parsed, raw))
                }
                _ => None,
            }
        })
        .collect();

    let Some(order) = order else {
        return candidates.first().map(|(_, raw)| raw.to_string());
    };

    let exact = candidates.iter().find(|(parsed, _)| {
        matches!(parsed, ParsedDescriptor::Sort { sort_order, .. } if *sort_order == order)
    });
    if let Some((_, raw)) = exact {
        return Some(raw.to_string());
    }

    candidates
        .first()
        .and_then(|(parsed, _)| parsed.with_order(order))
}

fn find_filter_path(options: &[SortFilterOption], category: &str) -> Option<String> {
    options.iter().find_map(|option| match option.descriptor()? {
        parsed @ ParsedDescriptor::Filter { .. } if parsed.has_category(category) => {
            option.raw_value.clone()
        }
        _ => None,
    })
}

/// `current` with its path replaced by `path`; scheme, host and query kept.
pub fn navigation_url(current: &str, path: &str) -> Result<String, SortFilterError> {
    let mut url =
        Url::parse(current).map_err(|_| SortFilterError::InvalidLocation(current.to_string()))?;
    url.set_path(path);
    Ok(url.into())
}

/// Resolve `request` against the live page and navigate on a match.
///
/// Returns the resolution so the caller can report it; errors are advisory.
pub fn apply<P: SortFilterPage + ?Sized>(
    page: &P,
    request: &SortFilterRequest,
) -> Result<Resolution, SortFilterError> {
    let options = page.options(request.side);
    let resolution = resolve(request, &options)?;

    if let Resolution::Navigate(path) = &resolution {
        let target = navigation_url(&page.current_url(), path)?;
        page.navigate(&target);
        return Ok(Resolution::Navigate(target));
    }

    Ok(resolution)
}
