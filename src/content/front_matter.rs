use std::collections::HashMap;

const DELIMITER: &str = "---\n";
const CLOSING: &str = "\n---\n";

/// Splits raw post text into its frontmatter block and body.
///
/// The block must start at the very first byte of the text with a `---` line
/// and end with another `---` line. If the opening delimiter is absent, no
/// header is returned and the whole text is the body.
pub fn parse_front_matter(raw: &str) -> (Option<HashMap<String, String>>, &str) {
    let Some(rest) = raw.strip_prefix(DELIMITER) else {
        return (None, raw);
    };

    let Some(end) = rest.find(CLOSING) else {
        return (None, raw);
    };

    let block = &rest[..end];
    let body = &rest[end + CLOSING.len()..];

    let mut fields = HashMap::new();
    for line in block.lines() {
        // Lines without a separator carry no metadata
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    (Some(fields), body)
}
