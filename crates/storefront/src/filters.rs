//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

use tahaqiq_core::Price;

/// Formats a decimal amount as a cedi price.
///
/// Usage in templates: `{{ max_price|ghs }}`
#[askama::filter_fn]
pub fn ghs(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    Ok(raw
        .parse::<Decimal>()
        .map_or(raw, |amount| Price::local(amount).to_string()))
}

/// Renders a 0-5 rating as five stars, rounded to the nearest whole star.
///
/// Usage in templates: `{{ product.rating|stars }}`
#[askama::filter_fn]
pub fn stars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_string(&value.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn star_string(raw: &str) -> String {
    let rating = raw.parse::<f32>().unwrap_or(0.0).clamp(0.0, 5.0);
    let full = rating.round() as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_string_rounds() {
        assert_eq!(star_string("4.6"), "★★★★★");
        assert_eq!(star_string("4.4"), "★★★★☆");
        assert_eq!(star_string("0"), "☆☆☆☆☆");
    }

    #[test]
    fn test_star_string_clamps_garbage() {
        assert_eq!(star_string("9"), "★★★★★");
        assert_eq!(star_string("n/a"), "☆☆☆☆☆");
    }
}
