use std::borrow::Cow;

use crate::language::CommentSyntax;

/// What is left of a line once block-comment spans have been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRemainder<'a> {
    /// Nothing but comment text (and whitespace) on the line.
    Consumed,
    /// Trimmed text outside any block-comment span.
    Code(Cow<'a, str>),
}

pub struct CommentDetector<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    /// Returns `true` if the trimmed text starts with the single-line marker.
    #[must_use]
    pub fn is_single_line_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .single_line
            .as_deref()
            .is_some_and(|marker| trimmed.starts_with(marker))
    }

    /// Text before a trailing single-line comment, trimmed.
    #[must_use]
    pub fn strip_trailing_comment<'s>(&self, code: &'s str) -> &'s str {
        self.syntax
            .single_line
            .as_deref()
            .and_then(|marker| code.find(marker))
            .map_or(code, |idx| code[..idx].trim())
    }

    /// Resolve block-comment transitions on one trimmed, non-empty line.
    ///
    /// `in_block_comment` is the state carried between lines; it is updated to
    /// reflect whether a block comment is still open after this line. Markers
    /// do not nest: while inside a comment only the end marker is looked for.
    pub fn strip_block_comments<'s>(
        &self,
        trimmed: &'s str,
        in_block_comment: &mut bool,
    ) -> LineRemainder<'s> {
        let Some((start, end)) = self.syntax.multi_line.as_ref() else {
            return LineRemainder::Code(Cow::Borrowed(trimmed));
        };

        let mut rest: Cow<'s, str> = Cow::Borrowed(trimmed);

        loop {
            if *in_block_comment {
                let Some(end_idx) = rest.find(end.as_str()) else {
                    return LineRemainder::Consumed;
                };
                *in_block_comment = false;
                rest = trim_cow(rest, end_idx + end.len());
            } else {
                let Some(start_idx) = rest.find(start.as_str()) else {
                    return LineRemainder::Code(rest);
                };
                let body_idx = start_idx + start.len();

                if let Some(end_offset) = rest[body_idx..].find(end.as_str()) {
                    let before = rest[..start_idx].trim();
                    let after = rest[body_idx + end_offset + end.len()..].trim();
                    rest = Cow::Owned(format!("{before} {after}").trim().to_string());
                } else {
                    *in_block_comment = true;
                    let before = rest[..start_idx].trim();
                    if before.is_empty() {
                        return LineRemainder::Consumed;
                    }
                    return LineRemainder::Code(Cow::Owned(before.to_string()));
                }
            }

            if rest.is_empty() {
                return LineRemainder::Consumed;
            }
        }
    }
}

/// Drop the first `from` bytes of `text` and trim, borrowing where possible.
fn trim_cow(text: Cow<'_, str>, from: usize) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s[from..].trim()),
        Cow::Owned(s) => Cow::Owned(s[from..].trim().to_string()),
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
