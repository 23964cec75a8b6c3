use rand::Rng;

/// Uniform sample in `[min, max)`; returns `min` when the range is empty.
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Linear re-map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// Not clamped: values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Unclamped linear interpolation; `amount > 1` overshoots.
#[inline]
pub fn lerp(from: f32, to: f32, amount: f32) -> f32 {
    from + (to - from) * amount
}

/// Remainder with the sign of the divisor, so positions stay in `[0, m)`.
#[inline]
pub fn wrap_mod(value: f32, modulus: f32) -> f32 {
    if modulus <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(modulus)
}

/// Re-enter a coordinate through the opposite edge once it is more than
/// `margin` outside `[0, extent]`.
#[inline]
pub fn wrap_with_margin(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Velocity after a coordinate leaves `[0, extent]`: pointed back toward
/// the interior. The position itself is left where it is.
#[inline]
pub fn bounce(value: f32, velocity: f32, extent: f32) -> f32 {
    if value < 0.0 {
        velocity.abs()
    } else if value > extent {
        -velocity.abs()
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_extrapolates() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(map_range(20.0, 0.0, 10.0, 1.0, 0.0), -1.0);
    }

    #[test]
    fn bounce_turns_back_toward_interior() {
        assert_eq!(bounce(-2.0, -1.5, 100.0), 1.5);
        assert_eq!(bounce(102.0, 0.7, 100.0), -0.7);
        // Already heading inward: unchanged, even when outside.
        assert_eq!(bounce(-2.0, 1.5, 100.0), 1.5);
        assert_eq!(bounce(102.0, -0.7, 100.0), -0.7);
        // Edges are still inside.
        assert_eq!(bounce(0.0, -1.0, 100.0), -1.0);
        assert_eq!(bounce(100.0, 1.0, 100.0), 1.0);
    }

    #[test]
    fn wrap_mod_is_non_negative() {
        assert_eq!(wrap_mod(-10.0, 100.0), 90.0);
        assert_eq!(wrap_mod(250.0, 100.0), 50.0);
    }
}
