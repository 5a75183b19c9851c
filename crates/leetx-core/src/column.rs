//! Planning for the injected `ml dl` column.
//!
//! The DOM half walks each listing table, snapshots the original first-column
//! cells into [`FirstColumnCell`]s and inserts whatever [`plan_column`]
//! returns right after each of them.

use crate::config::table::{COLUMN_TITLE, SERIES_PATH};
use crate::link::LinkKind;

/// Listing layout, decided by the page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Table with a header row; the torrent link is the cell's second child.
    Standard,
    /// Series index: no header row, the link is the cell's first child.
    Series,
}

impl ListingMode {
    pub fn from_url(url: &str) -> Self {
        if url.contains(SERIES_PATH) {
            Self::Series
        } else {
            Self::Standard
        }
    }

    fn has_header(self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// Links found in an original first-column cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FirstColumnCell {
    /// `href` of the first child element.
    pub first_link: Option<String>,
    /// `href` of the first child's next sibling element.
    pub second_link: Option<String>,
}

impl FirstColumnCell {
    /// Torrent page link for the given layout.
    fn torrent_link(&self, mode: ListingMode) -> Option<&str> {
        match mode {
            ListingMode::Series => self.first_link.as_deref(),
            ListingMode::Standard => self.second_link.as_deref(),
        }
    }
}

/// One cell to insert after its original first-column cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnCell {
    /// `<th>` carrying the column title.
    Header { title: &'static str },
    /// `<td>` with a magnet and a direct-download trigger for `href`.
    Triggers { href: String },
}

impl ColumnCell {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Header { .. } => "th",
            Self::Triggers { .. } => "td",
        }
    }

    /// Trigger kinds rendered in this cell, in display order.
    pub fn triggers(&self) -> &'static [LinkKind] {
        match self {
            Self::Header { .. } => &[],
            Self::Triggers { .. } => &[LinkKind::Magnet, LinkKind::DirectDownload],
        }
    }
}

/// Cells to insert for one table, index-aligned with `cells`.
///
/// The first cell of a table with a header becomes the title; every other
/// cell gets triggers pointing at its torrent page, or `#` when the original
/// cell has no link.
pub fn plan_column(mode: ListingMode, cells: &[FirstColumnCell]) -> Vec<ColumnCell> {
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            if index == 0 && mode.has_header() {
                return ColumnCell::Header {
                    title: COLUMN_TITLE,
                };
            }
            let href = cell
                .torrent_link(mode)
                .map(str::trim)
                .filter(|href| !href.is_empty())
                .unwrap_or("#");
            ColumnCell::Triggers {
                href: href.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_row(link: &str) -> FirstColumnCell {
        FirstColumnCell {
            first_link: Some("https://1337x.to/sub/42/0/".to_string()),
            second_link: Some(link.to_string()),
        }
    }

    #[test]
    fn test_listing_mode_from_url() {
        assert_eq!(
            ListingMode::from_url("https://1337x.to/series/a-to-z/1/13/"),
            ListingMode::Series
        );
        assert_eq!(
            ListingMode::from_url("https://1337x.to/home/"),
            ListingMode::Standard
        );
    }

    #[test]
    fn test_standard_table_gets_header_then_triggers() {
        let cells = vec![
            FirstColumnCell::default(),
            standard_row("https://1337x.to/torrent/1/a/"),
            standard_row("  https://1337x.to/torrent/2/b/ "),
        ];
        assert_eq!(
            plan_column(ListingMode::Standard, &cells),
            vec![
                ColumnCell::Header {
                    title: COLUMN_TITLE
                },
                ColumnCell::Triggers {
                    href: "https://1337x.to/torrent/1/a/".to_string()
                },
                ColumnCell::Triggers {
                    href: "https://1337x.to/torrent/2/b/".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_series_table_has_no_header() {
        let cells = vec![
            FirstColumnCell {
                first_link: Some("https://1337x.to/series/show/".to_string()),
                second_link: None,
            },
            FirstColumnCell {
                first_link: Some("https://1337x.to/series/other/".to_string()),
                second_link: Some("https://1337x.to/ignored/".to_string()),
            },
        ];
        let planned = plan_column(ListingMode::Series, &cells);
        assert_eq!(
            planned,
            vec![
                ColumnCell::Triggers {
                    href: "https://1337x.to/series/show/".to_string()
                },
                ColumnCell::Triggers {
                    href: "https://1337x.to/series/other/".to_string()
                },
            ]
        );
        assert!(planned.iter().all(|cell| cell.tag() == "td"));
    }

    #[test]
    fn test_missing_link_falls_back_to_hash() {
        let cells = vec![
            FirstColumnCell::default(),
            FirstColumnCell::default(),
            standard_row("   "),
        ];
        let planned = plan_column(ListingMode::Standard, &cells);
        assert_eq!(
            planned[1],
            ColumnCell::Triggers {
                href: "#".to_string()
            }
        );
        assert_eq!(
            planned[2],
            ColumnCell::Triggers {
                href: "#".to_string()
            }
        );
    }

    #[test]
    fn test_empty_table() {
        assert!(plan_column(ListingMode::Standard, &[]).is_empty());
    }
}
