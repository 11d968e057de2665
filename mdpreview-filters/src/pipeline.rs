//! Pipeline runner
//!
//! A [`Pipeline`] owns one fresh instance of each filter it runs. Running it consumes it, which
//! keeps filter state from leaking into the next document.

use crate::fence::verbatim_mask;
use crate::filter::{Filter, FilterKind, PIPELINE_ORDER};

/// Ordered filters applied one full pass after another.
///
/// # Examples
///
/// ```ignore
/// let lines = split_lines("# Title\n\nSome **bold** text\n");
/// let html = Pipeline::standard().run(lines);
/// ```
pub struct Pipeline {
    filters: Vec<(FilterKind, Box<dyn Filter>)>,
}

impl Pipeline {
    /// All filters, in [`PIPELINE_ORDER`].
    pub fn standard() -> Self {
        Self::from_kinds(&PIPELINE_ORDER)
    }

    /// The given filters, in the given order.
    ///
    /// The caller owns the ordering constraints; [`Pipeline::without`] is usually the better
    /// choice as it keeps the standard order.
    pub fn from_kinds(kinds: &[FilterKind]) -> Self {
        Pipeline {
            filters: kinds.iter().map(|kind| (*kind, kind.build())).collect(),
        }
    }

    /// The standard pipeline minus the `skipped` filters.
    pub fn without(skipped: &[FilterKind]) -> Self {
        let kinds: Vec<FilterKind> = PIPELINE_ORDER
            .into_iter()
            .filter(|kind| !skipped.contains(kind))
            .collect();
        Self::from_kinds(&kinds)
    }

    pub fn kinds(&self) -> Vec<FilterKind> {
        self.filters.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Feed `lines` through every filter in turn.
    ///
    /// Each filter sees the complete output of the previous one. Fenced blocks are located once,
    /// on the raw input, and every pass gets the same verbatim mask.
    pub fn run(self, lines: Vec<String>) -> Vec<String> {
        let line_count = lines.len();
        let verbatim = verbatim_mask(&lines);
        tracing::debug!(
            fenced = verbatim.iter().filter(|flag| **flag).count(),
            "scanned fenced blocks"
        );
        self.filters
            .into_iter()
            .fold(lines, |lines, (kind, mut filter)| {
                let output = filter.apply(lines, &verbatim);
                debug_assert_eq!(output.len(), line_count, "{} changed line count", kind.name());
                tracing::debug!(filter = kind.name(), lines = output.len(), "applied filter");
                output
            })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
