/// Turns a raw field name into a column header.
///
/// Underscores become spaces and the first letter of every whitespace-delimited
/// word is uppercased: `engine_capacity_cc` becomes `Engine Capacity Cc`.
/// Everything else is left as is.
pub fn humanize_header(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
