//! Client-side list shaping: date ordering, upcoming/past split, paging.
//!
//! DESIGN
//! ======
//! Backend timestamps arrive in several textual shapes (RFC 3339 from the
//! API, naive `datetime-local` values echoed back from forms, bare dates).
//! All are normalized to UTC `OffsetDateTime` by `parse_timestamp`.
//!
//! Sorting treats a missing or unparseable timestamp as the Unix epoch, so
//! such items sort first. Partitioning excludes them entirely.

use std::collections::BTreeSet;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::types::{AlertNotification, Application, Interview, Job, Readable, SavedJob, StatusNotification};

/// Rows per page on every paginated page.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Parse an API timestamp into UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second]]][optional [.[subsecond]]]"
    );
    if let Ok(at) = PrimitiveDateTime::parse(raw, naive) {
        return Some(at.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Anything listed by a date field.
pub trait Timestamped {
    fn timestamp(&self) -> Option<&str>;

    fn parsed_timestamp(&self) -> Option<OffsetDateTime> {
        self.timestamp().and_then(parse_timestamp)
    }
}

impl Timestamped for Interview {
    fn timestamp(&self) -> Option<&str> {
        self.scheduled_at.as_deref()
    }
}

impl Timestamped for Application {
    fn timestamp(&self) -> Option<&str> {
        self.applied_at.as_deref()
    }
}

impl Timestamped for Job {
    fn timestamp(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for SavedJob {
    fn timestamp(&self) -> Option<&str> {
        self.saved_at.as_deref()
    }
}

impl Timestamped for AlertNotification {
    fn timestamp(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for StatusNotification {
    fn timestamp(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for &str {
    fn timestamp(&self) -> Option<&str> {
        Some(*self)
    }
}

impl Timestamped for Option<&str> {
    fn timestamp(&self) -> Option<&str> {
        *self
    }
}

fn sort_key<T: Timestamped>(item: &T) -> OffsetDateTime {
    item.parsed_timestamp().unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Stable ascending sort by timestamp.
pub fn sort_by_timestamp<T: Timestamped>(items: &mut [T]) {
    items.sort_by_cached_key(sort_key::<T>);
}

/// Stable descending sort by timestamp; undated items end up last.
pub fn sort_newest_first<T: Timestamped>(items: &mut [T]) {
    items.sort_by_cached_key(|item| std::cmp::Reverse(sort_key(item)));
}

/// Items split around a reference instant, input order preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<T> {
    /// At or after the reference instant.
    pub upcoming: Vec<T>,
    /// Strictly before the reference instant.
    pub past: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            upcoming: Vec::new(),
            past: Vec::new(),
        }
    }
}

/// Split dated items into upcoming and past. Undated items are dropped.
pub fn partition_by_time<T: Timestamped>(items: impl IntoIterator<Item = T>, now: OffsetDateTime) -> Partition<T> {
    let mut partition = Partition::default();
    for item in items {
        match item.parsed_timestamp() {
            Some(at) if at >= now => partition.upcoming.push(item),
            Some(_) => partition.past.push(item),
            None => {}
        }
    }
    partition
}

// =============================================================================
// PAGING
// =============================================================================

/// Page position and bounds. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    total_pages: usize,
}

impl Pager {
    /// Clamp `page` into `1..=total_pages`; a zero total counts as one page.
    #[must_use]
    pub fn new(page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// Pager for `len` items at `per_page` rows each.
    #[must_use]
    pub fn for_items(len: usize, per_page: usize, page: usize) -> Self {
        Self::new(page, total_pages(len, per_page))
    }

    #[must_use]
    pub fn page(self) -> usize {
        self.page
    }

    #[must_use]
    pub fn total_pages(self) -> usize {
        self.total_pages
    }

    /// Controls are hidden when everything fits on one page.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn has_prev(self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::new(self.page.saturating_sub(1), self.total_pages)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.page + 1, self.total_pages)
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// `ceil(len / per_page)`, never less than one.
#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// One page of a borrowed list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub pager: Pager,
}

/// Slice out page `page` (clamped into range).
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let pager = Pager::for_items(items.len(), per_page, page);
    let start = ((pager.page() - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        pager,
    }
}

// =============================================================================
// MARKERS
// =============================================================================

/// Flag jobs that appear in the candidate's saved list.
pub fn mark_saved(jobs: &mut [Job], saved: &[SavedJob]) {
    let saved_ids: BTreeSet<_> = saved
        .iter()
        .filter_map(|entry| entry.job.as_ref().map(|job| job.id))
        .collect();
    for job in jobs {
        job.is_saved = saved_ids.contains(&job.id);
    }
}

#[must_use]
pub fn unread_count<N: Readable>(items: &[N]) -> usize {
    items.iter().filter(|item| !item.is_read()).count()
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;
