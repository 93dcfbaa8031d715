//! Pure dimension math, testable without any I/O.

/// Scale both edges by `factor`, flooring each result.
///
/// Edges never drop below 1 px so tiny sources still produce an encodable image.
///
/// ```
/// # use scan_organizer::imaging::scaled_dimensions;
/// assert_eq!(scaled_dimensions((100, 50), 0.7), (70, 35));
/// assert_eq!(scaled_dimensions((101, 33), 0.7), (70, 23));
/// ```
pub fn scaled_dimensions(original: (u32, u32), factor: f64) -> (u32, u32) {
    let (w, h) = original;
    let scale = |edge: u32| ((edge as f64 * factor).floor() as u32).max(1);
    (scale(w), scale(h))
}
