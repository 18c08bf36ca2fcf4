//! Page arithmetic for the results pager.

/// Maximum number of page buttons shown at once.
pub const WINDOW_SIZE: u32 = 5;

/// What: Number of pages needed to show `total` results at `size` per page.
///
/// Output:
/// - `ceil(total / size)`, saturated to `u32::MAX`; 0 when `size` is 0.
#[must_use]
pub fn total_pages(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
}

/// What: Page numbers shown around `current`.
///
/// Inputs:
/// - `current`: Page being viewed (1-based).
/// - `pages`: Total page count.
///
/// Output:
/// - Ascending page numbers, at most [`WINDOW_SIZE`] of them.
///
/// Details:
/// - With five or fewer pages every page is listed.
/// - Near either end the window pins to that end; otherwise it centers on `current`.
#[must_use]
pub fn page_window(current: u32, pages: u32) -> Vec<u32> {
    if pages <= WINDOW_SIZE {
        return (1..=pages).collect();
    }
    let start = if current <= 3 {
        1
    } else if current >= pages - 2 {
        pages - 4
    } else {
        current - 2
    };
    (start..start + WINDOW_SIZE).collect()
}

/// Clamp a requested page into `[1, pages]`; page 1 when there are no pages.
#[must_use]
pub fn clamp_page(requested: i64, pages: u32) -> u32 {
    let upper = i64::from(pages.max(1));
    u32::try_from(requested.clamp(1, upper)).unwrap_or(1)
}

/// What the pager widget draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerView {
    /// Current page.
    pub current: u32,
    /// Total page count.
    pub total_pages: u32,
    /// Page numbers to list.
    pub window: Vec<u32>,
    /// Whether "previous" is clickable.
    pub prev_enabled: bool,
    /// Whether "next" is clickable.
    pub next_enabled: bool,
}

/// What: Describe the pager for the given position.
///
/// Output:
/// - `None` when everything fits on a single page.
#[must_use]
pub fn pager_view(current: u32, total: u64, size: u32) -> Option<PagerView> {
    let pages = total_pages(total, size);
    if pages <= 1 {
        return None;
    }
    let current = current.clamp(1, pages);
    Some(PagerView {
        current,
        total_pages: pages,
        window: page_window(current, pages),
        prev_enabled: current > 1,
        next_enabled: current < pages,
    })
}
