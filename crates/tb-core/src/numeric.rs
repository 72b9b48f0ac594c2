use crate::TbError;

/// Floating point type used for all solver arithmetic (°C, W)
pub type Real = f64;

/// Pass `v` through, or fail with [`TbError::NonFinite`] naming `what`.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TbError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TbError::NonFinite { what, value: v })
    }
}
