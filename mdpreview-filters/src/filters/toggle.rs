//! Open/close toggling over delimiter tokens
//!
//! Shared by the bold, emphasis and inline-code filters. The token that gets replaced next is
//! the first one *in declaration order* that occurs anywhere in the line, not the one that
//! appears first in the line. The open/closed state survives across lines.

#[derive(Debug, Clone)]
pub(crate) struct TokenToggle {
    tokens: &'static [&'static str],
    open_tag: &'static str,
    close_tag: &'static str,
    open: bool,
}

impl TokenToggle {
    /// Neither tag may contain one of the tokens, or [`rewrite`](Self::rewrite) never ends.
    pub(crate) const fn new(
        tokens: &'static [&'static str],
        open_tag: &'static str,
        close_tag: &'static str,
    ) -> Self {
        Self {
            tokens,
            open_tag,
            close_tag,
            open: false,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    fn next_tag(&self) -> &'static str {
        if self.open {
            self.close_tag
        } else {
            self.open_tag
        }
    }

    fn find_token(&self, line: &str) -> Option<&'static str> {
        self.tokens.iter().copied().find(|token| line.contains(token))
    }

    /// Replace tokens one at a time until none is left in the line.
    pub(crate) fn rewrite(&mut self, mut line: String) -> String {
        while let Some(token) = self.find_token(&line) {
            line = line.replacen(token, self.next_tag(), 1);
            self.open = !self.open;
        }
        line
    }
}
