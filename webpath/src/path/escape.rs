//! URI component escaping.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped by URI component encoding: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`. Separators are escaped like everything else.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `path` as a single URI component.
///
/// # Examples
///
/// ```
/// use webpath::path::escape;
///
/// assert_eq!(escape("a b/c"), "a%20b%2Fc");
/// assert_eq!(escape("it's(1)!"), "it's(1)!");
/// assert_eq!(escape("é"), "%C3%A9");
/// ```
#[must_use]
pub fn escape(path: &str) -> String {
    utf8_percent_encode(path, URI_COMPONENT).to_string()
}
