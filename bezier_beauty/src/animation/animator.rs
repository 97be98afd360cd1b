use log::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Advance, AnimationState, TIME_STEP};
use crate::{
    bezier::{HandleCascade, handle_cascade_into},
    core::math::Vector2,
    palette::PALETTE_SIZE,
    polygon::regular_polygon,
};

/// Width and height of the canvas the default options are laid out for.
pub const DEFAULT_CANVAS_SIZE: f64 = 700.0;

/// Gap kept between the polygon's circumscribed circle and the canvas edge.
pub const CANVAS_MARGIN: f64 = 50.0;

/// What happens to the curve trail when the animation moves on to the next polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrailPolicy {
    /// Keep every point traced so far, trails of earlier polygons stay visible.
    #[default]
    Accumulate,
    /// Start a fresh trail each time the side count changes.
    ClearOnShapeChange,
}

/// Options for [Animator].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorOptions {
    /// Center of the polygon's circumscribed circle.
    pub center: Vector2,
    /// Radius of the polygon's circumscribed circle.
    pub radius: f64,
    /// Amount `t` advances per tick.
    pub time_step: f64,
    /// Largest side count reached, the animation freezes after sweeping it.
    pub max_sides: usize,
    pub trail_policy: TrailPolicy,
}

impl AnimatorOptions {
    /// Options centering the polygon in a `width` by `height` canvas, radius is half the width
    /// minus [CANVAS_MARGIN].
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            center: Vector2::new(width / 2.0, height / 2.0),
            radius: width / 2.0 - CANVAS_MARGIN,
            time_step: TIME_STEP,
            max_sides: PALETTE_SIZE,
            trail_policy: TrailPolicy::default(),
        }
    }
}

impl Default for AnimatorOptions {
    #[inline]
    fn default() -> Self {
        Self::for_canvas(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)
    }
}

/// Geometry to draw for one frame, borrowed from the [Animator].
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Handle levels for the frame, level 0 is the closed polygon.
    pub cascade: &'a HandleCascade,
    /// Every curve point traced so far.
    pub trail: &'a [Vector2],
    /// Side count the cascade was built from (selects the trail color).
    pub sides: usize,
    /// Interpolation fraction the cascade was built with.
    pub t: f64,
}

/// Drives the polygon morph one tick at a time.
///
/// Each [Animator::tick] rebuilds the polygon for the current side count, cascades it at the
/// current `t`, appends the curve point to the trail and then advances the [AnimationState].
#[derive(Debug, Clone)]
pub struct Animator {
    options: AnimatorOptions,
    state: AnimationState,
    cascade: HandleCascade,
    trail: Vec<Vector2>,
    frame_sides: usize,
    frame_t: f64,
    frozen_reported: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorOptions::default())
    }
}

impl Animator {
    pub fn new(options: AnimatorOptions) -> Self {
        Self::with_state(options, AnimationState::default())
    }

    /// Create an animator resuming from `state`.
    pub fn with_state(options: AnimatorOptions, state: AnimationState) -> Self {
        Self {
            options,
            state,
            cascade: HandleCascade::new(),
            trail: Vec::new(),
            frame_sides: state.sides,
            frame_t: state.t,
            frozen_reported: false,
        }
    }

    #[inline]
    pub fn options(&self) -> &AnimatorOptions {
        &self.options
    }

    /// State the next tick will build its frame from.
    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn cascade(&self) -> &HandleCascade {
        &self.cascade
    }

    #[inline]
    pub fn trail(&self) -> &[Vector2] {
        &self.trail
    }

    /// Returns true once the last polygon has been swept and ticks no longer change the state.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.state.is_frozen(self.options.max_sides)
    }

    /// Geometry produced by the most recent tick (empty cascade before the first tick).
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            cascade: &self.cascade,
            trail: &self.trail,
            sides: self.frame_sides,
            t: self.frame_t,
        }
    }

    /// Build the frame for the current state then advance the state.
    pub fn tick(&mut self) -> FrameData<'_> {
        let AnimationState { t, sides } = self.state;

        if self.options.trail_policy == TrailPolicy::ClearOnShapeChange
            && sides != self.frame_sides
        {
            debug!(
                "clearing {} trail points from {} sided polygon",
                self.trail.len(),
                self.frame_sides
            );
            self.trail.clear();
        }

        let polygon = regular_polygon(sides, self.options.center, self.options.radius);
        handle_cascade_into(&polygon, t, &mut self.cascade);
        if let Some(pt) = self.cascade.curve_point() {
            self.trail.push(pt);
        }

        self.frame_sides = sides;
        self.frame_t = t;
        trace!(
            "tick sides: {}, t: {:.4}, levels: {}, trail: {}",
            sides,
            t,
            self.cascade.level_count(),
            self.trail.len()
        );

        match self.state.advance(self.options.time_step, self.options.max_sides) {
            Advance::Swept => {}
            Advance::NextShape { sides } => {
                info!("sweep complete, moving to {} sided polygon", sides);
            }
            Advance::Frozen => {
                if !self.frozen_reported {
                    info!(
                        "last polygon ({} sides) swept, animation frozen at t = {}",
                        sides, self.state.t
                    );
                    self.frozen_reported = true;
                }
            }
        }

        self.frame()
    }
}
