use bezier_beauty::{animation::Animator, bezier::handle_cascade, core::math::Vector2, polygon::*};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn handle_cascade_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_cascade");
    let center = Vector2::new(350.0, 350.0);
    for sides in [3usize, 9, 32, 128] {
        let pts = regular_polygon(sides, center, 300.0);
        group.bench_with_input(BenchmarkId::new("regular_polygon", sides), &pts, |b, pts| {
            b.iter(|| handle_cascade(pts, 0.37))
        });
    }

    group.finish();
}

fn animator_group(c: &mut Criterion) {
    c.bench_function("animator_full_run", |b| {
        b.iter(|| {
            let mut animator = Animator::default();
            while !animator.is_frozen() {
                animator.tick();
            }
            animator.trail().len()
        })
    });
}

criterion_group!(benches, handle_cascade_group, animator_group);
criterion_main!(benches);
