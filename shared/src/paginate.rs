use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Page sizes offered by the selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Ten,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn label(self) -> String {
        format!("{} / Page", self.get())
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for PageSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "10" => Ok(PageSize::Ten),
            "50" => Ok(PageSize::Fifty),
            "100" => Ok(PageSize::Hundred),
            other => Err(ParseError::PageSize(other.to_string())),
        }
    }
}

/// One window over the derived comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub size: PageSize,
    pub total: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_mul(self.size.get()) < self.total
    }

    /// `"start-end of total items"`, 1-based and inclusive.
    ///
    /// `start` is not clamped: a page past the end (reachable after a search
    /// shrinks the list) reads e.g. `"21-2 of 2 items"`.
    pub fn range_label(&self) -> String {
        let size = self.size.get();
        let start = self.number.saturating_sub(1).saturating_mul(size).saturating_add(1);
        let end = self.number.saturating_mul(size).min(self.total);
        format!("{start}-{end} of {} items", self.total)
    }
}

/// Slices `[(page-1)*size, page*size)` out of `items`, clamped to the list.
/// Pages past the end yield an empty slice. Page 0 is read as page 1.
pub fn paginate<T>(items: &[T], page: usize, size: PageSize) -> Page<'_, T> {
    let number = page.max(1);
    let len = items.len();
    let start = (number - 1).saturating_mul(size.get()).min(len);
    let end = number.saturating_mul(size.get()).min(len);

    Page {
        items: &items[start..end],
        number,
        size,
        total: len,
    }
}
