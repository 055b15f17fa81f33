//! Heading-to-direction conversion for screen-space kinematics.

use ndarray::Array1;

/// Converts a heading in degrees to a unit direction vector.
///
/// Headings are clockwise-positive on a y-down screen, so the angle is
/// negated (via `360 - angle`) before applying standard trigonometry.
pub fn direction(angle_deg: f32) -> Array1<f32> {
    let rad = (360.0 - angle_deg).to_radians();
    Array1::from_vec(vec![rad.cos(), rad.sin()])
}
