//! City name slugs.
//!
//! Requests name cities as lowercase slugs with hyphens between words
//! (`gila-bend`). The directory stores display names (`Gila Bend`).

use super::error::CityError;

/// Check that `slug` is lowercase with no spaces.
///
/// Like the request rule it enforces, a slug must contain at least one
/// letter and no uppercase letters.
pub fn validate_slug(slug: &str) -> Result<(), CityError> {
    let has_letter = slug.chars().any(char::is_alphabetic);
    let has_upper = slug.chars().any(char::is_uppercase);

    if !has_letter || has_upper || slug.contains(char::is_whitespace) {
        return Err(CityError::InvalidFormat(slug.to_string()));
    }

    Ok(())
}

/// Turn a slug into a display name: hyphens become spaces, words are
/// title-cased.
///
/// # Examples
///
/// ```
/// use fuel_server::cities::format_city_name;
///
/// assert_eq!(format_city_name("gila-bend"), "Gila Bend");
/// assert_eq!(format_city_name("o'fallon"), "O'Fallon");
/// ```
pub fn format_city_name(slug: &str) -> String {
    let mut name = String::with_capacity(slug.len());
    let mut prev_is_letter = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            name.push(c);
            prev_is_letter = false;
        }
    }

    name
}
