use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    MissingField,
    MalformedJson,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => f.write_str("Missing message field"),
            Self::MalformedJson => f.write_str("Invalid JSON format"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Pulls the value of the `"message"` field out of `body` by scanning for
/// the key, the next colon, and the next pair of double quotes.
///
/// This is not a JSON parser. Escape sequences are not interpreted, so an
/// escaped quote inside the value ends it early.
pub fn extract_message(body: &str) -> Result<&str, ExtractError> {
    let key = body.find("\"message\"").ok_or(ExtractError::MissingField)?;
    let colon = key + find_from(body, key, ':')?;
    let start = colon + find_from(body, colon, '"')? + 1;
    let end = start + find_from(body, start, '"')?;
    Ok(&body[start..end])
}

fn find_from(body: &str, from: usize, needle: char) -> Result<usize, ExtractError> {
    body[from..].find(needle).ok_or(ExtractError::MalformedJson)
}

/// Escapes backslash, double quote, newline, carriage return and tab for
/// embedding in a JSON string literal. Nothing else is touched.
pub fn escape_json(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
