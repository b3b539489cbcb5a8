use std::ops::RangeInclusive;

use serde::Serialize;

use crate::html::escape_query_component;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The items on this page; empty past the last page.
    pub items: Vec<T>,

    /// 1-based page number.
    pub page: usize,

    /// Items per page.
    pub page_size: usize,

    /// Items across all pages.
    pub total: usize,

    /// Number of pages; zero when there are no items at all.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based, inclusive positions of this page's items within the whole
    /// listing, for "showing 6-10 of 12". `None` for an empty page.
    pub fn span(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.page.saturating_sub(1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Cuts page `page` out of `items`.
///
/// Page numbers start at 1; zero is read as 1, and a zero page size as 1.
///
/// ```
/// # use blogmark::posts::paginate;
/// let page = paginate((1..=12).collect(), 3, 5);
/// assert_eq!(page.items, vec![11, 12]);
/// assert_eq!((page.total, page.total_pages), (12, 3));
/// assert_eq!(page.span(), Some((11, 12)));
/// ```
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = if total == 0 {
        0
    } else {
        (total - 1) / page_size + 1
    };

    let start = (page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// The page numbers a pagination bar shows around the current page.
///
/// A run of at most `max_visible` consecutive pages is centred on the current
/// page where possible and shifted back when it would run past the last page.
/// Pages 1 and `total_pages` are offered as shortcuts when they fall outside
/// the run, with a gap marker when they are not adjacent to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// The current page, clamped into `1..=total_pages`.
    pub current: usize,

    /// Number of pages, at least 1.
    pub total_pages: usize,

    /// First page of the consecutive run.
    pub start: usize,

    /// Last page of the consecutive run.
    pub end: usize,

    /// Page 1, when it is not part of the run.
    pub first: Option<usize>,

    /// Whether pages are skipped between `first` and `start`.
    pub leading_gap: bool,

    /// The last page, when it is not part of the run.
    pub last: Option<usize>,

    /// Whether pages are skipped between `end` and `last`.
    pub trailing_gap: bool,

    /// The page before the current one, if any.
    pub previous: Option<usize>,

    /// The page after the current one, if any.
    pub next: Option<usize>,
}

impl PageWindow {
    /// Lays out the bar for `current` out of `total_pages`.
    ///
    /// ```
    /// # use blogmark::PageWindow;
    /// let w = PageWindow::new(10, 10, 5);
    /// assert_eq!(w.pages(), 6..=10);
    /// assert_eq!((w.first, w.leading_gap), (Some(1), true));
    /// assert_eq!((w.last, w.next), (None, None));
    /// ```
    pub fn new(current: usize, total_pages: usize, max_visible: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current = current.clamp(1, total_pages);
        let max_visible = max_visible.max(1);

        let mut start = current.saturating_sub(max_visible / 2).max(1);
        let end = start.saturating_add(max_visible - 1).min(total_pages);
        if end - start < max_visible - 1 {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        PageWindow {
            current,
            total_pages,
            start,
            end,
            first: if start > 1 { Some(1) } else { None },
            leading_gap: start > 2,
            last: if end < total_pages {
                Some(total_pages)
            } else {
                None
            },
            trailing_gap: end + 1 < total_pages,
            previous: if current > 1 { Some(current - 1) } else { None },
            next: if current < total_pages {
                Some(current + 1)
            } else {
                None
            },
        }
    }

    /// The consecutive run of page numbers.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Whether a bar is worth showing at all.
    pub fn is_needed(&self) -> bool {
        self.total_pages > 1
    }

    /// The listing URL for `page`, keeping a tag filter.
    ///
    /// Page 1 carries no `page` parameter.
    ///
    /// ```
    /// # use blogmark::PageWindow;
    /// assert_eq!(PageWindow::href(1, None), "/posts");
    /// assert_eq!(PageWindow::href(2, Some("C++")), "/posts?page=2&tag=C%2B%2B");
    /// ```
    pub fn href(page: usize, tag: Option<&str>) -> String {
        let mut query = vec![];
        if page > 1 {
            query.extend_from_slice(format!("page={}", page).as_bytes());
        }
        if let Some(tag) = tag {
            if !query.is_empty() {
                query.push(b'&');
            }
            query.extend_from_slice(b"tag=");
            escape_query_component(&mut query, tag.as_bytes()).unwrap();
        }

        if query.is_empty() {
            "/posts".to_string()
        } else {
            format!("/posts?{}", String::from_utf8_lossy(&query))
        }
    }
}
