//! Zero-safe arithmetic shared by the domain summaries.
//!
//! Every ratio in a summary goes through these helpers so that an empty or
//! all-zero collection yields `0.0` instead of `NaN` or infinity.

/// Kilograms per tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// `numerator / denominator`, or `0.0` when the denominator is not positive
/// or the result is not finite.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let r = numerator / denominator;
        if r.is_finite() { r } else { 0.0 }
    } else {
        0.0
    }
}

/// `part / whole * 100`, zero-safe.
#[must_use]
pub fn percentage(part: f64, whole: f64) -> f64 {
    safe_ratio(part, whole) * 100.0
}

/// Weighted mean of `(value, weight)` pairs, zero-safe.
///
/// Each pair carries its own weight; the denominator is the sum of weights.
#[must_use]
pub fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weighted, weights) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(ws, w), (value, weight)| {
            (ws + value * weight, w + weight)
        });
    safe_ratio(weighted, weights)
}

/// Convert kilograms CO₂e to tonnes.
#[must_use]
pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

/// Coerce user input to a non-negative finite quantity.
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
