//! Size constraint and aspect-ratio helpers shared by measurement and the
//! flex algorithm.
//! Spec: <https://www.w3.org/TR/css-sizing-3/#min-max-constraints>

/// Apply min/max constraints to a size. When the constraints contradict
/// (`min > max`), the minimum wins, per CSS 2.2 §10.4.
#[inline]
pub(crate) fn apply_constraints(size: f32, min: f32, max: f32) -> f32 {
    size.clamp(min, max.max(min))
}

/// Apply optional min/max constraints, treating absent bounds as 0/+inf.
#[inline]
pub(crate) fn apply_optional_constraints(size: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    apply_constraints(size, min.unwrap_or(0.0), max.unwrap_or(f32::INFINITY))
}

/// Transfer a definite size through an aspect ratio (`width / height`) when
/// exactly one of the pair is definite.
/// Spec: <https://www.w3.org/TR/css-sizing-4/#aspect-ratio>
#[inline]
pub(crate) fn transfer_aspect(
    width: Option<f32>,
    height: Option<f32>,
    ratio: Option<f32>,
) -> (Option<f32>, Option<f32>) {
    match (width, height, ratio) {
        (Some(definite), None, Some(ratio)) => (Some(definite), Some(definite / ratio)),
        (None, Some(definite), Some(ratio)) => (Some(definite * ratio), Some(definite)),
        _ => (width, height),
    }
}

/// Sanitize a measurement callback output: non-finite or negative numbers
/// collapse to zero.
#[inline]
pub(crate) fn sanitize_measure_output(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
