//! Pagination types
//!
//! A page position is a single offset; the page number is derived from it,
//! so the two can never drift apart.

use crate::error::{Error, Result};
use crate::types::LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of one page of launches
///
/// Always satisfies `page() == offset() / LIMIT + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageCursor {
    offset: u64,
}

impl PageCursor {
    /// The first page (offset 0)
    pub const fn first() -> Self {
        Self { offset: 0 }
    }

    /// Cursor for a 1-based page number
    pub fn from_page(page: u64) -> Result<Self> {
        if page == 0 {
            return Err(Error::invalid_page("page must be at least 1"));
        }
        (page - 1)
            .checked_mul(LIMIT as u64)
            .map(|offset| Self { offset })
            .ok_or_else(|| Error::invalid_page(format!("page {page} is out of range")))
    }

    /// Cursor for a zero-based offset, which must be a multiple of [`LIMIT`]
    pub fn from_offset(offset: u64) -> Result<Self> {
        if offset % LIMIT as u64 != 0 {
            return Err(Error::invalid_page(format!(
                "offset {offset} is not a multiple of {LIMIT}"
            )));
        }
        Ok(Self { offset })
    }

    /// Zero-based index of the first record on this page
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Records requested per page
    pub const fn limit(&self) -> u32 {
        LIMIT
    }

    /// 1-based page number
    pub const fn page(&self) -> u64 {
        self.offset / LIMIT as u64 + 1
    }

    /// Whether a previous page exists
    pub const fn has_previous(&self) -> bool {
        self.offset >= LIMIT as u64
    }

    /// The previous page, or `None` on the first page
    pub fn previous(&self) -> Option<Self> {
        self.offset
            .checked_sub(LIMIT as u64)
            .map(|offset| Self { offset })
    }

    /// The next page
    ///
    /// Unbounded: the source decides whether anything lives there. Saturates
    /// at the last representable page.
    pub fn next(&self) -> Self {
        self.offset
            .checked_add(LIMIT as u64)
            .map_or(*self, |offset| Self { offset })
    }

    /// Apply a navigation action; Back on the first page is a no-op
    pub fn navigate(&self, navigation: Navigation) -> Self {
        match navigation {
            Navigation::Back => self.previous().unwrap_or(*self),
            Navigation::Next => self.next(),
        }
    }
}

impl TryFrom<u64> for PageCursor {
    type Error = Error;

    fn try_from(offset: u64) -> Result<Self> {
        Self::from_offset(offset)
    }
}

impl From<PageCursor> for u64 {
    fn from(cursor: PageCursor) -> Self {
        cursor.offset
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} (offset {})", self.page(), self.offset)
    }
}

/// A pager action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// One page towards the start
    Back,
    /// One page further
    Next,
}

impl Navigation {
    /// Lowercase action name, as used in routes
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Navigation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "back" => Ok(Self::Back),
            "next" => Ok(Self::Next),
            other => Err(Error::invalid_page(format!("unknown navigation '{other}'"))),
        }
    }
}
