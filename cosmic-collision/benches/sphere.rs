#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use cosmic_collision::math::{Sphere, Vector};

pub fn sphere_bench(c: &mut Criterion) {
    let a = Sphere::new(Vector::new(0.0, 0.25, -0.5), 5.0);
    let b = Sphere::new(Vector::new(8.0, 1.0, 2.0), 4.0);

    c.bench_function("sphere: intersects", |bencher| {
        bencher.iter(|| black_box(a).intersects(black_box(b)))
    });

    c.bench_function("sphere: surface_distance", |bencher| {
        bencher.iter(|| black_box(a).surface_distance(black_box(b)))
    });

    c.bench_function("sphere: 100 x 100 pairs", |bencher| {
        let spheres: Vec<Sphere> = (0..100)
            .map(|i| Sphere::new(Vector::new(i as f32, (i % 7) as f32, 0.0), 0.75))
            .collect();
        bencher.iter(|| {
            let mut count = 0usize;
            for &p in &spheres {
                for &q in &spheres {
                    count += usize::from(p.intersects(q));
                }
            }
            black_box(count)
        })
    });

    c.bench_function("vector: normal", |bencher| {
        bencher.iter(|| black_box(Vector::new(1.0, 2.0, 3.0)).normal())
    });
}

criterion_group!(benches, sphere_bench);
criterion_main!(benches);
