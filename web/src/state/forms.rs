//! Conversions between text inputs and optional API fields.

/// Blank input means the field is unset.
#[must_use]
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Text for an input seeded from an optional field.
#[must_use]
pub fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Parse a year input. Blank is `Ok(None)`.
///
/// # Errors
///
/// A message suitable for the form when the input is not a year.
pub fn year(raw: &str) -> Result<Option<u32>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|year| (1800..=9999).contains(year))
        .map(Some)
        .ok_or_else(|| format!("\"{trimmed}\" is not a valid year."))
}

/// Parse a whole number of years of experience. Blank is zero.
///
/// # Errors
///
/// A message suitable for the form when the input is negative or not a number.
pub fn years_of_experience(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .ok()
        .filter(|years| *years >= 0)
        .ok_or_else(|| "Experience must be a whole number of years.".to_owned())
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;
