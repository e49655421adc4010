// tests/surface_bounds.rs
use glam::I64Vec2;
use proptest::prelude::*;
use rover_runner::{Axis, BoundsError, LOWER_BOUND, Surface, SurfaceRecordError};

#[test]
fn test_negative_upper_x_is_rejected() {
    assert_eq!(
        Surface::new(-1, 0),
        Err(BoundsError {
            axis: Axis::X,
            value: -1,
            lower_bound: LOWER_BOUND,
        })
    );
}

#[test]
fn test_negative_upper_y_is_rejected() {
    let err = Surface::new(0, -1).unwrap_err();
    assert_eq!(err.axis, Axis::Y);
    assert_eq!(err.value, -1);
    assert_eq!(
        err.to_string(),
        "the upper bound -1 for coordinate y must be greater than or equal to 0"
    );
}

#[test]
fn test_single_cell_surface_is_anchored_at_origin() {
    let surface = Surface::new(0, 0).unwrap();
    assert_eq!(surface.lower(), I64Vec2::ZERO);
    assert_eq!(surface.upper(), I64Vec2::ZERO);

    assert!(surface.contains(I64Vec2::new(0, 0)));
    assert!(!surface.contains(I64Vec2::new(1, 0)));
    assert!(!surface.contains(I64Vec2::new(-1, 0)));
    assert!(!surface.contains(I64Vec2::new(0, 1)));
    assert!(!surface.contains(I64Vec2::new(0, -1)));
}

#[test]
fn test_surface_displays_its_bounds() {
    let surface = Surface::new(5, 3).unwrap();
    assert_eq!(
        surface.to_string(),
        "Surface | lower-bounds [0,0] - upper-bounds [5,3]"
    );
}

#[test]
fn test_surface_deserializes_through_constructor() {
    let surface = Surface::new(5, 3).unwrap();
    let json = serde_json::to_string(&surface).unwrap();
    assert_eq!(json, r#"{"lower":[0,0],"upper":[5,3]}"#);
    assert_eq!(serde_json::from_str::<Surface>(&json).unwrap(), surface);

    // A lower corner away from the origin is rejected.
    let err = serde_json::from_str::<Surface>(r#"{"lower":[3,3],"upper":[5,5]}"#).unwrap_err();
    assert!(
        err.to_string()
            .contains("the lower bounds [3,3] must be the origin [0,0]"),
        "{err}"
    );

    // Negative upper bounds fail the same way `Surface::new` does.
    let err = serde_json::from_str::<Surface>(r#"{"lower":[0,0],"upper":[-1,-5]}"#).unwrap_err();
    let expected = SurfaceRecordError::Bounds(BoundsError {
        axis: Axis::X,
        value: -1,
        lower_bound: LOWER_BOUND,
    });
    assert!(err.to_string().contains(&expected.to_string()), "{err}");
}

proptest! {
    /// Construction fails exactly when a bound is negative.
    #[test]
    fn test_construction_fails_iff_bound_negative(x in -100i64..100, y in -100i64..100) {
        prop_assert_eq!(Surface::new(x, y).is_err(), x < 0 || y < 0);
    }

    /// Membership matches the inclusive rectangle `[0, ux] × [0, uy]`.
    #[test]
    fn test_contains_matches_inclusive_rectangle(
        ux in 0i64..50,
        uy in 0i64..50,
        x in -60i64..60,
        y in -60i64..60,
    ) {
        let surface = Surface::new(ux, uy).unwrap();
        let inside = (0..=ux).contains(&x) && (0..=uy).contains(&y);
        prop_assert_eq!(surface.contains(I64Vec2::new(x, y)), inside);
    }
}
