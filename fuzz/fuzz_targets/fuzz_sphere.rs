#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;

use cosmic_collision::math::{self, Sphere, Vector};

fuzz_target!(|input: (Sphere, Sphere, f32)| {
    let (a, b, new_radius) = input;
    check_radius(a, new_radius);
    check_pair(a, b);
});

fn check_radius(mut sphere: Sphere, new_radius: f32) {
    assert!(sphere.radius() >= 0.0 && sphere.radius().is_sign_positive());

    sphere.set_radius(new_radius);
    let radius = sphere.radius();
    assert!(radius.is_sign_positive(), "{new_radius} became {radius}");
    if new_radius > 0.0 {
        assert_eq!(radius.to_bits(), new_radius.to_bits());
    } else {
        assert_eq!(radius.to_bits(), 0.0f32.to_bits());
    }
}

fn check_pair(a: Sphere, b: Sphere) {
    let hit = a.intersects(b);
    assert_eq!(hit, math::intersects(a, b));
    if a.radius() == 0.0 {
        assert!(!hit, "{a} has zero radius but intersects {b}");
    }
    if hit {
        // Overlap means a negative gap between the surfaces.
        assert!(a.surface_distance(b) < 0.0, "{a} {b}");
    }

    // Symmetric in bits, not just in value, since the centers are subtracted either way round.
    let distance = Vector::distance(a.center(), b.center());
    let reverse = Vector::distance(b.center(), a.center());
    if !distance.is_nan() {
        assert_eq!(distance.to_bits(), reverse.to_bits());
    }
}
