use std::borrow::Cow;

use crate::language::CommentSyntax;

/// Verdict for one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Block comment state carried from one line to the next within a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationState<'a> {
    in_block_comment: bool,
    active_end: Option<&'a str>,
}

impl<'a> ClassificationState<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_block_comment: false,
            active_end: None,
        }
    }

    #[must_use]
    pub const fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    #[must_use]
    pub const fn active_end(&self) -> Option<&'a str> {
        self.active_end
    }

    const fn enter(&mut self, end: &'a str) {
        self.in_block_comment = true;
        self.active_end = Some(end);
    }

    const fn leave(&mut self) {
        self.in_block_comment = false;
        self.active_end = None;
    }
}

/// Strips comments from single lines according to a [`CommentSyntax`].
///
/// Matching is purely textual: a comment token inside a string literal is
/// treated as a real comment start, and block comments do not nest.
pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    /// Classify `line`, updating `state` for the next line of the same file.
    #[must_use]
    pub fn classify(&self, line: &str, state: &mut ClassificationState<'a>) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        if self.residual(line, state).trim().is_empty() {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    /// Return what is left of `line` once comment text and surrounding
    /// whitespace are removed.
    ///
    /// Single-line tokens are applied before block delimiters are scanned, so
    /// a block start that follows a single-line token on the same line is
    /// never seen.
    #[must_use]
    pub fn residual<'l>(
        &self,
        line: &'l str,
        state: &mut ClassificationState<'a>,
    ) -> Cow<'l, str> {
        let mut working = line.trim();
        if working.is_empty() {
            return Cow::Borrowed(working);
        }

        if state.in_block_comment {
            let resume_at = state
                .active_end
                .and_then(|end| working.find(end).map(|pos| pos + end.len()));
            let Some(resume_at) = resume_at else {
                return Cow::Borrowed("");
            };
            working = &working[resume_at..];
            state.leave();
        }

        if let Some(pos) = self
            .syntax
            .single_line
            .iter()
            .find_map(|token| working.find(token.as_str()))
        {
            working = &working[..pos];
        }

        self.strip_block_comments(working, state)
    }

    fn strip_block_comments<'l>(
        &self,
        line: &'l str,
        state: &mut ClassificationState<'a>,
    ) -> Cow<'l, str> {
        let syntax: &'a CommentSyntax = self.syntax;
        let mut current = Cow::Borrowed(line);

        for (start, end) in &syntax.multi_line {
            let Some(start_pos) = current.find(start.as_str()) else {
                continue;
            };
            let after_start = start_pos + start.len();

            if let Some(end_pos) = current[after_start..].find(end.as_str()) {
                let resume_at = after_start + end_pos + end.len();
                let joined = format!("{}{}", &current[..start_pos], &current[resume_at..]);
                current = Cow::Owned(joined);
            } else {
                match &mut current {
                    Cow::Borrowed(s) => {
                        let kept: &'l str = *s;
                        *s = &kept[..start_pos];
                    }
                    Cow::Owned(s) => s.truncate(start_pos),
                }
                state.enter(end);
                break;
            }
        }

        match current {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
