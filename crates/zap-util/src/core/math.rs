use crate::error::RangeError;

/// Remap `value` from `[in_from, in_to]` to `[out_from, out_to]`.
///
/// Not clamped: values outside the input range extrapolate. A zero-width
/// input range divides by zero and yields inf/NaN; use [`try_map`] when the
/// range comes from untrusted data.
#[inline]
pub fn map(value: f32, in_from: f32, in_to: f32, out_from: f32, out_to: f32) -> f32 {
    (value - in_from) / (in_to - in_from) * (out_to - out_from) + out_from
}

/// Checked [`map`]: rejects a zero-width input range.
pub fn try_map(
    value: f32,
    in_from: f32,
    in_to: f32,
    out_from: f32,
    out_to: f32,
) -> Result<f32, RangeError> {
    if in_to == in_from {
        return Err(RangeError::ZeroWidth { at: in_from });
    }
    Ok(map(value, in_from, in_to, out_from, out_to))
}

/// Move `current` towards `target` by at most `max_delta`, never past it.
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
