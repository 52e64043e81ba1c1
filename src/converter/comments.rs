/// Removes both comment syntaxes from a raw source document.
///
/// Two forms are recognized. A line comment starts at `NB.` and runs to the
/// end of its line; the line break itself is kept so line numbers in later
/// diagnostics stay meaningful. A block comment starts at `/#` and runs to
/// the nearest following `#/`, line breaks included; a block that is never
/// closed runs to the end of the input.
///
/// The line pass runs before the block pass, so a line comment can swallow a
/// block marker that sits on the same line. There is no escaping mechanism:
/// marker sequences inside string values are treated as comment delimiters
/// too.
///
/// # Parameters
/// - `source`: The raw document text.
///
/// # Returns
/// The text with all comments removed.
///
/// # Example
/// ```
/// use tomcast::converter::comments::strip_comments;
///
/// let cleaned = strip_comments("a = 1 NB. default\nb = 2\n");
/// assert_eq!(cleaned, "a = 1 \nb = 2\n");
///
/// let cleaned = strip_comments("a = 1\n/# old\nvalues\n#/\nb = 2\n");
/// assert_eq!(cleaned, "a = 1\n\nb = 2\n");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    strip_block_comments(&strip_line_comments(source))
}

/// Drops every `NB.` marker together with the rest of its line.
fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("NB.") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find('\n') {
            // The slice starts at the line break, which stays in the output.
            Some(offset) => &rest[start + offset..],
            None => "",
        };
    }

    out.push_str(rest);
    out
}

/// Drops every `/#` marker together with everything up to and including the
/// nearest `#/`. An unterminated block consumes the rest of the input.
fn strip_block_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/#") {
        out.push_str(&rest[..start]);
        rest = match rest[start + 2..].find("#/") {
            Some(offset) => &rest[start + 2 + offset + 2..],
            None => "",
        };
    }

    out.push_str(rest);
    out
}
