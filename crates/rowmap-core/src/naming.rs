//! Camel-case / snake-case name transforms
//!
//! Pure string helpers used to derive table and column names when a type
//! carries no explicit annotation. All transforms are total: empty input
//! yields empty output.

const UNDERSCORE: char = '_';

/// Convert a camel-case name to snake_case.
///
/// Each uppercase letter is lowercased and prefixed with an underscore;
/// a leading underscore (produced by an uppercase first character) is
/// stripped, so `User` becomes `user`, not `_user`.
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push(UNDERSCORE);
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    if out.starts_with(UNDERSCORE) {
        out.remove(0);
    }
    out
}

/// Convert a snake_case name to camel case, uppercasing the first letter
/// of every segment (`phone_number` becomes `PhoneNumber`).
///
/// Not used by the mapping flows themselves; kept as the inverse of
/// [`camel_to_snake`]. Empty segments from consecutive underscores are
/// skipped.
pub fn snake_to_camel(name: &str) -> String {
    name.split(UNDERSCORE)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    let mut word = String::with_capacity(segment.len());
                    word.push(first.to_ascii_uppercase());
                    word.push_str(chars.as_str());
                    word
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Derive a table name from a qualified type name: take the last
/// `.`/`::`-separated segment and convert it to snake_case.
///
/// `dao.User` and `dao::User` both resolve to `user`.
pub fn table_name_from_type_name(qualified: &str) -> String {
    let simple = qualified.rsplit(['.', ':']).next().unwrap_or(qualified);
    camel_to_snake(simple)
}
