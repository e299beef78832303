// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Move `value` one step towards zero, never crossing it.
///
/// Every countdown in the simulation (cooldowns, hurt and overlay timers)
/// uses this so that a timer at 0 stays at 0.
pub fn tick_down(value: u32) -> u32 {
    value.saturating_sub(1)
}

/// Horizontal orientation of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Direction pointing from `from` towards `to` along the x axis.
    /// Ties resolve to the left, matching a non-positive delta.
    pub fn towards(from: f32, to: f32) -> Self {
        if to - from > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(250, 0, 200), 200);
    }

    #[test]
    fn test_tick_down_floors_at_zero() {
        assert_eq!(tick_down(3), 2);
        assert_eq!(tick_down(1), 0);
        assert_eq!(tick_down(0), 0);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }

    #[test]
    fn test_facing_towards() {
        assert_eq!(Facing::towards(10.0, 50.0), Facing::Right);
        assert_eq!(Facing::towards(50.0, 10.0), Facing::Left);
        assert_eq!(Facing::towards(50.0, 10.0).opposite(), Facing::Right);
    }
}
