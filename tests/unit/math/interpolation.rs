//! Tests for scalar, channel and color interpolation helpers

#[cfg(test)]
mod tests {
    use algosketch::math::interpolation::{
        inverse_lerp, lerp, lerp_channel, lerp_rgba, segment, smoothstep,
    };

    // Tests lerp hits both endpoints and extrapolates outside [0, 1]
    // Verified by clamping t inside lerp
    #[test]
    fn test_lerp_endpoints_and_extrapolation() {
        assert!((lerp(2.0f64, 10.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((lerp(2.0f64, 10.0, 1.0) - 10.0).abs() < 1e-12);
        assert!((lerp(0.0f64, 10.0, 0.25) - 2.5).abs() < 1e-12);
        assert!((lerp(0.0f64, 10.0, 1.5) - 15.0).abs() < 1e-12);
        assert!((lerp(0.0f32, 4.0, 0.5) - 2.0).abs() < 1e-6);
    }

    // Tests inverse lerp clamps and handles a degenerate range
    // Verified by removing the span check
    #[test]
    fn test_inverse_lerp_clamps_and_handles_empty_range() {
        assert!((inverse_lerp(0.0f64, 10.0, 5.0) - 0.5).abs() < 1e-12);
        assert!(inverse_lerp(0.0f64, 10.0, -3.0).abs() < 1e-12);
        assert!((inverse_lerp(0.0f64, 10.0, 30.0) - 1.0).abs() < 1e-12);
        assert!(inverse_lerp(3.0f64, 3.0, 7.0).abs() < 1e-12);
    }

    // Tests smoothstep is clamped, symmetric and flat at the ends
    // Verified by replacing smoothstep with the identity
    #[test]
    fn test_smoothstep_shape() {
        assert!(smoothstep(0.0f64).abs() < 1e-12);
        assert!((smoothstep(1.0f64) - 1.0).abs() < 1e-12);
        assert!((smoothstep(0.5f64) - 0.5).abs() < 1e-12);
        assert!(smoothstep(-2.0f64).abs() < 1e-12);
        assert!((smoothstep(3.0f64) - 1.0).abs() < 1e-12);
        assert!(smoothstep(0.1f64) < 0.1, "Start of the curve should ease in");
        assert!((smoothstep(0.3f64) + smoothstep(0.7f64) - 1.0).abs() < 1e-12);
    }

    // Tests channel interpolation rounds and clamps t
    // Verified by truncating instead of rounding
    #[test]
    fn test_lerp_channel_rounds() {
        assert_eq!(lerp_channel(0, 255, 0.5), 128);
        assert_eq!(lerp_channel(10, 20, 0.0), 10);
        assert_eq!(lerp_channel(10, 20, 1.0), 20);
        assert_eq!(lerp_channel(10, 20, 4.0), 20);
        assert_eq!(lerp_channel(200, 100, 0.5), 150);
    }

    // Tests RGBA interpolation treats each channel independently
    // Verified by swapping channel order in the result
    #[test]
    fn test_lerp_rgba_per_channel() {
        let color = lerp_rgba([0, 100, 200, 255], [100, 100, 0, 55], 0.5);
        assert_eq!(color, [50, 100, 100, 155]);
    }

    // Tests segment lookup keeps the upper stop in range
    // Verified by removing the len - 2 cap
    #[test]
    fn test_segment_indices() {
        assert_eq!(segment(0.0, 5), (0, 0.0));
        let (index, fraction) = segment(1.0, 5);
        assert_eq!(index, 3);
        assert!((fraction - 1.0).abs() < 1e-12);

        let (index, fraction) = segment(0.5, 5);
        assert_eq!(index, 2);
        assert!(fraction.abs() < 1e-12);

        let (index, fraction) = segment(0.3, 3);
        assert_eq!(index, 0);
        assert!((fraction - 0.6).abs() < 1e-12);

        assert_eq!(segment(0.7, 1), (0, 0.0));
        assert_eq!(segment(-1.0, 4), (0, 0.0));
    }
}
