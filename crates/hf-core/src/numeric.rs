use crate::HfError;

/// Floating point type used for flow rates (gpm), pressures (psi) and diameters (in).
pub type Real = f64;

/// Relative slack for comparing computed gpm/psi figures. Table values are
/// whole or quarter numbers, so anything closer than this is rounding noise.
pub const FIGURE_EPSILON: Real = 1e-9;

/// Whether two computed figures agree to within [`FIGURE_EPSILON`].
pub fn nearly_equal(a: Real, b: Real) -> bool {
    (a - b).abs() <= FIGURE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Exact catalog-key comparison.
///
/// Catalog tables are keyed by literal values (1.75, 15/16, 150 gpm ...) and
/// lookups are by exact match; callers that want a near match must round first.
#[inline]
pub fn same_key(a: Real, b: Real) -> bool {
    a == b
}
