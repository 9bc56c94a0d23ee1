//! Distance metric over normal-form lines.

use crate::angle::canonical;
use crate::hough::NormalLine;

/// Angular difference (degrees) beyond which two folded lines sit closer
/// across the 180-degree wrap than within the period.
const WRAP_BREAK: u16 = 90;

/// Distance between two lines in (theta, rho) space, weighing one degree of
/// angular difference like one pixel of perpendicular offset. That matches
/// the accumulator's one degree by one pixel bucket geometry, so lines that
/// voted into neighboring cells come out close under this metric.
///
/// Both lines are folded to theta in `[0, 180)` first. When the folded
/// angles differ by more than 90 degrees the pair is compared across the
/// wrap: the angular difference becomes `180 - raw` and rho flips sign on
/// one side, because `(theta, rho)` and `(theta + 180, -rho)` describe the
/// same line. At a difference of exactly 90 degrees no wrap is applied.
pub fn distance(a: NormalLine, b: NormalLine) -> f64 {
    let (ta, ra) = canonical(a.theta, a.rho);
    let (tb, rb) = canonical(b.theta, b.rho);
    let dt_raw = ta.abs_diff(tb);
    let (dt, dr) = if dt_raw > WRAP_BREAK {
        ((180 - dt_raw) as f64, (ra + rb) as f64)
    } else {
        (dt_raw as f64, (ra - rb) as f64)
    };
    dt.hypot(dr)
}
