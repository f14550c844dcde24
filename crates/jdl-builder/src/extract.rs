//! Primitive extractors for leaf token images.
//!
//! Each function decodes the literal a token carries, stripping the delimiters
//! the grammar leaves in the image. Numeric images are never parsed; they are
//! kept as written.

use std::sync::LazyLock;

use regex::Regex;

use crate::cst::Token;

static COMMENT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\*+").expect("comment-open pattern is valid"));

static DATA_BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/\*#").expect("data-block-open pattern is valid"));

static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+/$").expect("block-close pattern is valid"));

/// Strip the opening `/**` and closing `*/` markers of a documentation comment.
///
/// Any number of stars is accepted on either side.
pub fn trim_comment(comment: &str) -> String {
    let opened = COMMENT_OPEN.replace(comment, "");
    BLOCK_CLOSE.replace(&opened, "").into_owned()
}

/// Strip the opening `/*#` and closing `*/` markers of an embedded data block.
pub fn trim_data_block(block: &str) -> String {
    let opened = DATA_BLOCK_OPEN.replace(block, "");
    BLOCK_CLOSE.replace(&opened, "").into_owned()
}

/// Drop the first and last character of a delimited image.
///
/// Used for quoted strings and `/regex/` bodies. Images shorter than two
/// characters yield an empty string.
pub fn strip_delimiters(image: &str) -> &str {
    let mut chars = image.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

/// The text of a quoted string token, without its quotes.
pub fn unquote(token: &Token<'_>) -> String {
    strip_delimiters(token.inner()).to_string()
}

/// The images of a token run, in order.
pub fn images(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|token| token.inner().to_string()).collect()
}

/// Join a token run with `.` (`owner.address.city`).
pub fn dotted(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| *token.inner())
        .collect::<Vec<_>>()
        .join(".")
}

/// The image of a token as an owned string.
pub fn image(token: &Token<'_>) -> String {
    token.inner().to_string()
}
