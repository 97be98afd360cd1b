use bezier_beauty::{
    animation::{Animator, AnimatorOptions, TrailPolicy},
    palette::trail_color,
};

fn main() {
    run(TrailPolicy::Accumulate);
    run(TrailPolicy::ClearOnShapeChange);
}

fn run(trail_policy: TrailPolicy) {
    println!("Running animation to completion with {trail_policy:?} trail...");

    let mut animator = Animator::new(AnimatorOptions {
        trail_policy,
        ..Default::default()
    });

    let mut ticks = 0;
    let mut last_sides = animator.state().sides;
    while !animator.is_frozen() {
        animator.tick();
        ticks += 1;

        let sides = animator.state().sides;
        if sides != last_sides {
            let c = trail_color(last_sides);
            println!(
                "  tick {ticks:4}: finished {last_sides} sided polygon (trail color rgb({}, {}, {})), trail has {} points",
                c.r,
                c.g,
                c.b,
                animator.trail().len()
            );
            last_sides = sides;
        }
    }

    let state = animator.state();
    println!(
        "  frozen after {ticks} ticks at {} sides, t = {}",
        state.sides, state.t
    );

    // ticks past the freeze rebuild the same frame
    animator.tick();
    assert_eq!(animator.state(), state);
}
