//! Stream normalization
//!
//! The consuming media library needs every record to have a unique id and a
//! date consistent with the list's sort order. The upstream stream breaks
//! both: sponsored inserts reuse ids across pages and carry no genuine
//! timestamp, and search results arrive in relevance order while the
//! consumer still sorts by date. The two transforms here repair each case.

use tracing::trace;

use crate::domain::models::Image;

/// Base constant for synthetic search dates. Must exceed the realistic
/// maximum item count across every page fetched in one browsing session.
pub const SEARCH_DATE_BASE: i64 = 100_000_000;

/// One-slot lookahead repair for undated entries in a listing stream.
///
/// Feeds on records in input order and maintains two pieces of state: the
/// last genuine timestamp seen, and at most one undated record waiting for
/// the first genuine timestamp. An undated record borrows its neighbor's
/// timestamp and has that timestamp appended to its id so the pair stays
/// distinguishable.
///
/// If a second undated record arrives while one is still waiting, the
/// waiting record is emitted unrepaired; only the record closest to the
/// first genuine timestamp borrows it. A record still waiting when the
/// stream ends is the explicit terminal case: it is emitted with its date
/// absent rather than forged.
#[derive(Debug, Default)]
pub struct DateRepairer {
    previous_date: Option<i64>,
    pending: Option<Image>,
}

impl DateRepairer {
    /// Fresh repairer with no date history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous_date: None,
            pending: None,
        }
    }

    /// Feed the next record in stream order, appending emissions to `out`.
    pub fn push(&mut self, image: Image, out: &mut Vec<Image>) {
        match image.date {
            None => {
                if let Some(previous) = self.previous_date {
                    let mut repaired = image;
                    trace!(id = %repaired.id, borrowed = previous, "repairing undated entry");
                    repaired.borrow_date(previous);
                    out.push(repaired);
                } else {
                    // No genuine date seen yet. Hold this record; a second
                    // undated arrival displaces the first, which stays
                    // unrepaired.
                    if let Some(displaced) = self.pending.take() {
                        out.push(displaced);
                    }
                    self.pending = Some(image);
                }
            }
            Some(date) => {
                self.previous_date = Some(date);
                if let Some(mut held) = self.pending.take() {
                    trace!(id = %held.id, borrowed = date, "resolving held entry");
                    held.borrow_date(date);
                    out.push(held);
                }
                out.push(image);
            }
        }
    }

    /// Flush the terminal state after the last record.
    ///
    /// Only reached with a held record when the entire stream was undated;
    /// the record keeps `date: None`.
    pub fn finish(mut self, out: &mut Vec<Image>) {
        if let Some(pending) = self.pending.take() {
            out.push(pending);
        }
    }
}

/// Repair a full listing page, preserving input order.
#[must_use]
pub fn repair_listing(images: impl IntoIterator<Item = Image>) -> Vec<Image> {
    let images = images.into_iter();
    let mut out = Vec::with_capacity(images.size_hint().0);
    let mut repairer = DateRepairer::new();
    for image in images {
        repairer.push(image, &mut out);
    }
    repairer.finish(&mut out);
    out
}

/// Assign synthetic dates to one page of search results.
///
/// Search results are relevance-ordered, but the consumer sorts by date;
/// each result gets a date derived from its overall rank in the result
/// stream so the consumer's sort leaves relative order intact. The rank
/// counter starts at `page * per_page` and is decremented once per item,
/// and the date is [`SEARCH_DATE_BASE`] minus the counter. The dates carry
/// no calendar meaning.
pub fn assign_search_dates(images: &mut [Image], page: u32, per_page: u32) {
    let mut rank = i64::from(page) * i64::from(per_page);
    for image in images {
        rank -= 1;
        image.date = Some(SEARCH_DATE_BASE - rank);
    }
}
