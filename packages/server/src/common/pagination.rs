//! Integer keyset pagination for post listings.
//!
//! Posts are walked newest-first: a page holds rows whose `no` is strictly
//! below the cursor, ordered by `no` descending. The first page is requested
//! with the sentinel cursor `0`, which normalizes to the maximum
//! representable cursor so the scan starts at the newest row. Re-querying
//! with the last-seen `no` as the next cursor yields a disjoint page.

use serde::Deserialize;

/// Page size applied when the caller supplies none.
const DEFAULT_SIZE: i32 = 10;

/// Upper bound on a single page.
const MAX_SIZE: i32 = 100;

fn default_size() -> i32 {
    DEFAULT_SIZE
}

/// Raw pagination arguments as they arrive on the query string.
///
/// `cursor = 0` means "no bound yet" and selects the first (newest) page.
/// A negative cursor is below every assigned `no` and yields an empty page.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageArgs {
    /// Exclusive upper bound on `no`; `0` is the first-page sentinel.
    #[serde(default)]
    pub cursor: i32,
    /// Requested page size.
    #[serde(default = "default_size")]
    pub size: i32,
}

impl Default for PageArgs {
    fn default() -> Self {
        PageArgs {
            cursor: 0,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageArgs {
    /// Normalize the arguments for the storage layer.
    ///
    /// Applies the sentinel rule (`0` becomes `i32::MAX`) and clamps the
    /// size into `1..=100`.
    pub fn normalize(self) -> NormalizedPage {
        let cursor = if self.cursor == 0 {
            i32::MAX
        } else {
            self.cursor
        };

        let size = self.size.clamp(1, MAX_SIZE);

        NormalizedPage {
            cursor,
            size: size as i64,
        }
    }
}

/// Normalized arguments in the form the storage queries consume.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedPage {
    /// Exclusive upper bound on `no`.
    pub cursor: i32,
    /// SQL LIMIT value.
    pub size: i64,
}
