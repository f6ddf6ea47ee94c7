use heck::ToSnakeCase;

const SEPARATOR: char = '_';

/// Joins the `_`-separated words of `src` into an upper camel case word.
///
/// Every word is lowercased and trimmed before its first letter is
/// uppercased, so `first_name` and `FIRST_NAME` both become `FirstName`.
/// Words that still contain the separator after splitting are dropped.
pub fn camelize(src: &str) -> String {
    let lower = src.to_lowercase();

    lower
        .split(SEPARATOR)
        .filter(|word| !word.contains(SEPARATOR))
        .map(|word| ucfirst(word.trim()))
        .collect()
}

/// Inserts `_` between a lowercase letter and the uppercase letter following
/// it, then lowercases the result: `firstName` becomes `first_name`.
///
/// This is not an exact inverse of [`camelize`]; acronyms stay glued
/// together (`userID` becomes `user_id`, `HTTPStatus` becomes `httpstatus`).
pub fn uncamelize(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 4);
    let mut prev_lower = false;

    for ch in src.chars() {
        if prev_lower && ch.is_ascii_uppercase() {
            out.push(SEPARATOR);
        }

        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }

    out
}

/// Uppercases the first character of `src`.
pub fn ucfirst(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character of `src`.
pub fn lcfirst(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_snake_case_key() {
        assert_eq!(camelize("first_name"), "FirstName");
        assert_eq!(camelize("FIRST_NAME"), "FirstName");
        assert_eq!(camelize("name"), "Name");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn camelize_keeps_empty_words_out() {
        assert_eq!(camelize("first__name"), "FirstName");
        assert_eq!(camelize("_id"), "Id");
    }

    #[test]
    fn uncamelize_camel_case_attribute() {
        assert_eq!(uncamelize("firstName"), "first_name");
        assert_eq!(uncamelize("aVeryLongName"), "a_very_long_name");
        assert_eq!(uncamelize("name"), "name");
    }

    #[test]
    fn uncamelize_acronyms() {
        assert_eq!(uncamelize("userID"), "user_id");
        assert_eq!(uncamelize("HTTPStatus"), "httpstatus");
    }

    #[test]
    fn round_trip_for_single_capital_words() {
        for attribute in ["firstName", "createdAt", "id", "emailAddressLine"] {
            assert_eq!(lcfirst(&camelize(&uncamelize(attribute))), attribute);
        }
    }

    #[test]
    fn first_letter_case() {
        assert_eq!(ucfirst("id"), "Id");
        assert_eq!(lcfirst("FirstName"), "firstName");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn snake_case_from_heck() {
        assert_eq!(snake_case("firstName"), "first_name");
        assert_eq!(snake_case("first_name"), "first_name");
    }
}
