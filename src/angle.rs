//! Angle arithmetic in degree-quantized line space.
//!
//! Lines in (theta, rho) normal form repeat every half turn: `(theta, rho)`
//! and `(theta + 180, -rho)` describe the same set of points. Folding into a
//! single period lets comparisons reason over one canonical domain.

/// Folds a normal-form line into theta in `[0, 180)`, negating rho once per
/// half turn removed.
#[inline]
pub fn canonical(theta_deg: u16, rho: i32) -> (u16, i32) {
    let folded = theta_deg % 180;
    if (theta_deg / 180) % 2 == 1 {
        (folded, -rho)
    } else {
        (folded, rho)
    }
}
