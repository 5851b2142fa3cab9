//! Input abstraction for the submarine controls.
//!
//! The simulation only ever sees [`InputState`]: six booleans sampled
//! once per tick. Where those booleans come from is the host's business;
//! the headless binary uses a scripted source.

/// Boolean control states sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move forward along the current heading
    pub forward: bool,
    /// Move backward along the current heading
    pub backward: bool,
    /// Turn left (increase yaw)
    pub turn_left: bool,
    /// Turn right (decrease yaw)
    pub turn_right: bool,
    /// Rise vertically
    pub rise: bool,
    /// Sink vertically
    pub sink: bool,
}

impl InputState {
    /// State with every control released.
    pub const RELEASED: Self = Self {
        forward: false,
        backward: false,
        turn_left: false,
        turn_right: false,
        rise: false,
        sink: false,
    };

    /// True when no control is held.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        !(self.forward
            || self.backward
            || self.turn_left
            || self.turn_right
            || self.rise
            || self.sink)
    }
}

/// Source of per-tick input states.
pub trait InputSource {
    /// Samples the control state for the current tick.
    fn sample(&mut self) -> InputState;
}

/// Scripted input for headless runs and tests: a sequence of
/// `(ticks, state)` segments, holding the last state once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<(u64, InputState)>,
    current: usize,
    ticks_in_segment: u64,
}

impl ScriptedInput {
    /// Creates a scripted source from `(ticks, state)` segments.
    #[must_use]
    pub fn new(segments: Vec<(u64, InputState)>) -> Self {
        Self {
            segments,
            current: 0,
            ticks_in_segment: 0,
        }
    }

    /// A simple patrol: cruise forward, sweep left, cruise, sweep
    /// right, then keep cruising.
    #[must_use]
    pub fn patrol() -> Self {
        let cruise = InputState {
            forward: true,
            ..InputState::RELEASED
        };
        let sweep_left = InputState {
            forward: true,
            turn_left: true,
            ..InputState::RELEASED
        };
        let sweep_right = InputState {
            forward: true,
            turn_right: true,
            ..InputState::RELEASED
        };
        Self::new(vec![
            (240, cruise),
            (120, sweep_left),
            (240, cruise),
            (120, sweep_right),
            (u64::MAX, cruise),
        ])
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> InputState {
        let Some(&(ticks, state)) = self.segments.get(self.current) else {
            // Script exhausted: hold the last state, or idle if empty.
            return self
                .segments
                .last()
                .map_or(InputState::RELEASED, |&(_, s)| s);
        };

        self.ticks_in_segment += 1;
        if self.ticks_in_segment >= ticks {
            self.current += 1;
            self.ticks_in_segment = 0;
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_is_idle() {
        assert!(InputState::RELEASED.is_idle());
        assert!(InputState::default().is_idle());
        let forward = InputState {
            forward: true,
            ..InputState::RELEASED
        };
        assert!(!forward.is_idle());
    }

    #[test]
    fn test_script_advances_through_segments() {
        let a = InputState {
            forward: true,
            ..InputState::RELEASED
        };
        let b = InputState {
            rise: true,
            ..InputState::RELEASED
        };
        let mut script = ScriptedInput::new(vec![(2, a), (1, b)]);

        assert_eq!(script.sample(), a);
        assert_eq!(script.sample(), a);
        assert_eq!(script.sample(), b);
        // Exhausted: holds the last state.
        assert_eq!(script.sample(), b);
        assert_eq!(script.sample(), b);
    }

    #[test]
    fn test_empty_script_is_idle() {
        let mut script = ScriptedInput::default();
        assert!(script.sample().is_idle());
    }
}
