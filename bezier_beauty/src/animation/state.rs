#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amount the interpolation fraction advances per tick.
pub const TIME_STEP: f64 = 0.01;

/// Side count of the first polygon animated.
pub const START_SIDES: usize = 3;

/// Mutable state carried between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationState {
    /// Interpolation fraction, may sit slightly above 1 before wrapping.
    pub t: f64,
    /// Side count of the polygon being swept.
    pub sides: usize,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            t: 0.0,
            sides: START_SIDES,
        }
    }
}

/// Outcome of [AnimationState::advance].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// `t` moved forward by the time step.
    Swept,
    /// `t` passed 1 so the sweep restarted on a polygon with one more side.
    NextShape { sides: usize },
    /// `t` passed 1 with `sides` already at the maximum, nothing changes anymore.
    Frozen,
}

impl AnimationState {
    pub fn new(t: f64, sides: usize) -> Self {
        Self { t, sides }
    }

    /// Step the state forward once.
    ///
    /// While `t <= 1` it advances by `time_step`. Once `t > 1` the sweep wraps to `t = 0` on the
    /// next polygon if `sides < max_sides`, otherwise the state stays as is (`t` remains above 1
    /// so every later call also reports [Advance::Frozen]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bezier_beauty::animation::*;
    /// let mut state = AnimationState::new(0.995, 8);
    /// assert_eq!(state.advance(TIME_STEP, 9), Advance::Swept);
    /// assert_eq!(state.advance(TIME_STEP, 9), Advance::NextShape { sides: 9 });
    /// assert_eq!(state, AnimationState::new(0.0, 9));
    ///
    /// let mut state = AnimationState::new(1.01, 9);
    /// assert_eq!(state.advance(TIME_STEP, 9), Advance::Frozen);
    /// assert_eq!(state, AnimationState::new(1.01, 9));
    /// ```
    pub fn advance(&mut self, time_step: f64, max_sides: usize) -> Advance {
        if self.t <= 1.0 {
            self.t += time_step;
            Advance::Swept
        } else if self.sides < max_sides {
            self.t = 0.0;
            self.sides += 1;
            Advance::NextShape { sides: self.sides }
        } else {
            Advance::Frozen
        }
    }

    /// Returns true if no further [AnimationState::advance] call can change this state.
    #[inline]
    pub fn is_frozen(&self, max_sides: usize) -> bool {
        self.t > 1.0 && self.sides >= max_sides
    }
}
