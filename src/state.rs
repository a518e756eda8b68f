//! Mutable state threaded through the translator between reports.
//!
//! Everything here lives as long as one run of the event loop and is owned
//! by a single [`Translator`](crate::translate::Translator).

/// Default base speed for synthesized motion.
pub const DEFAULT_BASE_SPEED: i32 = 10;

/// Modifier and acceleration state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorState {
    /// Whether slot 0 of the report buffer is a placeholder that must not be
    /// written out.
    pub suppress_slot0: bool,
    /// Whether the modifier key is currently down.
    pub modifier_held: bool,
    speed: i32,
    base_speed: i32,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_SPEED)
    }
}

impl TranslatorState {
    pub fn new(base_speed: i32) -> Self {
        Self {
            suppress_slot0: false,
            modifier_held: false,
            speed: base_speed,
            base_speed,
        }
    }

    /// Current motion magnitude.
    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn base_speed(&self) -> i32 {
        self.base_speed
    }

    /// Return the current speed and accelerate for the next repeat.
    pub fn take_speed(&mut self) -> i32 {
        let speed = self.speed;
        self.speed = self.speed.saturating_add(1);
        speed
    }

    /// Drop back to the base speed.
    #[inline]
    pub fn reset_speed(&mut self) {
        self.speed = self.base_speed;
    }

    /// Consume the suppress flag, returning whether slot 0 was suppressed.
    #[inline]
    pub fn take_suppress(&mut self) -> bool {
        std::mem::take(&mut self.suppress_slot0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_accelerates_and_resets() {
        let mut state = TranslatorState::default();
        assert_eq!(state.take_speed(), 10);
        assert_eq!(state.take_speed(), 11);
        assert_eq!(state.speed(), 12);

        state.reset_speed();
        assert_eq!(state.speed(), state.base_speed());
    }

    #[test]
    fn test_speed_saturates() {
        let mut state = TranslatorState::new(i32::MAX);
        assert_eq!(state.take_speed(), i32::MAX);
        assert_eq!(state.take_speed(), i32::MAX);
    }

    #[test]
    fn test_take_suppress_clears_flag() {
        let mut state = TranslatorState::default();
        assert!(!state.take_suppress());

        state.suppress_slot0 = true;
        assert!(state.take_suppress());
        assert!(!state.suppress_slot0);
    }
}
