//! Code-fence awareness
//!
//! Most filters must leave the body of a fenced code block alone. [`FenceTracker`] follows the
//! fence status line by line and reports a [`FenceState`] for each line.
//!
//! Only raw fence delimiters (a line whose left-trimmed text starts with three backticks) are
//! block boundaries. The code-fence filter rewrites those delimiters, so later filters cannot
//! find blocks by looking at their own input. The pipeline scans the raw document once into a
//! verbatim mask (see [`verbatim_mask`]) and hands it to every pass; line `i` of the mask stays
//! valid because no filter changes the line count.

/// Three backticks, the only fence style recognized.
pub const FENCE: &str = "```";

/// Line emitted by the code-fence filter when a block opens.
pub const BLOCK_OPEN: &str = "<pre><code>\n";

/// Line emitted by the code-fence filter when a block closes.
pub const BLOCK_CLOSE: &str = "</code></pre>\n";

/// Whether a line opens or closes a fenced code block.
pub fn is_fence_delimiter(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Where a line sits relative to fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    Outside,
    /// The line opens or closes a block.
    Delimiter,
    Inside,
}

impl FenceState {
    /// Delimiters and block bodies must be left untouched.
    pub fn is_verbatim(self) -> bool {
        self != FenceState::Outside
    }
}

/// Tracks whether the current line sits inside a fenced code block.
#[derive(Debug, Default, Clone)]
pub struct FenceTracker {
    in_block: bool,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any open block.
    pub fn reset(&mut self) {
        self.in_block = false;
    }

    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// Update the fence status with `line` and classify it.
    pub fn observe(&mut self, line: &str) -> FenceState {
        if is_fence_delimiter(line) {
            self.in_block = !self.in_block;
            FenceState::Delimiter
        } else if self.in_block {
            FenceState::Inside
        } else {
            FenceState::Outside
        }
    }

    /// Verbatim flag for every line of `lines`, starting from a reset tracker.
    pub fn scan(&mut self, lines: &[String]) -> Vec<bool> {
        self.reset();
        lines
            .iter()
            .map(|line| self.observe(line).is_verbatim())
            .collect()
    }
}

/// Lines of raw Markdown that belong to a fenced block, delimiters included.
pub fn verbatim_mask(lines: &[String]) -> Vec<bool> {
    FenceTracker::new().scan(lines)
}

/// Apply `rewrite` to every line not flagged in `verbatim`.
///
/// Lines past the end of the mask are treated as outside any block.
pub(crate) fn map_outside_fences<F>(
    lines: Vec<String>,
    verbatim: &[bool],
    mut rewrite: F,
) -> Vec<String>
where
    F: FnMut(String) -> String,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if verbatim.get(idx).copied().unwrap_or(false) {
                line
            } else {
                rewrite(line)
            }
        })
        .collect()
}
