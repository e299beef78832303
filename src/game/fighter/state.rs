// Fighter life-cycle state machine

/// Frames the eating animation runs before the heal lands
pub const EAT_FRAMES: u32 = 60;

/// Where a fighter goes once it finishes eating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterMeal {
    Fighting,
    Winning,
}

/// An eating animation in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub frames_remaining: u32,
    /// Health restored when the animation ends
    pub pending_heal: i32,
    pub then: AfterMeal,
}

/// Outcome of advancing a meal by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealTick {
    /// Still chewing; `first_half` selects the animation frame
    Chewing { first_half: bool },
    /// Done: apply the heal and move on
    Finished { heal: i32, then: AfterMeal },
}

/// Life-cycle of a fighter
///
/// Transient overlays (punch, jump and hurt poses) live beside this state as
/// timers; this enum only tracks the states that gate what a fighter may do.
/// Dead is absorbing and cannot be combined with eating or winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FighterState {
    /// Normal play: reads input or AI every frame
    #[default]
    Fighting,
    /// Opponent is down; input is ignored but physics and eating still run
    Winning,
    /// Uninterruptible heal animation; nothing else runs
    Eating(Meal),
    /// Knocked out for the rest of the match
    Dead,
}

impl FighterState {
    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }

    pub fn is_eating(&self) -> bool {
        matches!(self, Self::Eating(_))
    }

    /// Winning, or eating with a win already secured
    pub fn is_winner(&self) -> bool {
        matches!(
            self,
            Self::Winning
                | Self::Eating(Meal {
                    then: AfterMeal::Winning,
                    ..
                })
        )
    }

    /// Whether input or AI intents are applied
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Fighting)
    }

    /// Whether attacks can land on this fighter
    pub fn is_vulnerable(&self) -> bool {
        matches!(self, Self::Fighting | Self::Winning)
    }

    /// Start eating. Heals half the missing health (rounded down) once the
    /// animation ends. Returns false if the fighter is dead or already eating.
    pub fn begin_meal(&mut self, health: i32, max_health: i32) -> bool {
        let then = match self {
            Self::Fighting => AfterMeal::Fighting,
            Self::Winning => AfterMeal::Winning,
            Self::Eating(_) | Self::Dead => return false,
        };
        *self = Self::Eating(Meal {
            frames_remaining: EAT_FRAMES,
            pending_heal: (max_health - health) / 2,
            then,
        });
        true
    }

    /// Advance an in-progress meal. Returns None when not eating.
    pub fn tick_meal(&mut self) -> Option<MealTick> {
        let Self::Eating(meal) = self else {
            return None;
        };

        meal.frames_remaining = meal.frames_remaining.saturating_sub(1);
        if meal.frames_remaining > 0 {
            return Some(MealTick::Chewing {
                first_half: meal.frames_remaining > EAT_FRAMES / 2,
            });
        }

        let (heal, then) = (meal.pending_heal, meal.then);
        *self = match then {
            AfterMeal::Fighting => Self::Fighting,
            AfterMeal::Winning => Self::Winning,
        };
        Some(MealTick::Finished { heal, then })
    }

    /// Mark the fighter as the winner. One-shot: returns false if the fighter
    /// already won or is dead.
    pub fn win(&mut self) -> bool {
        match self {
            Self::Fighting => {
                *self = Self::Winning;
                true
            }
            Self::Eating(meal) if meal.then == AfterMeal::Fighting => {
                meal.then = AfterMeal::Winning;
                true
            }
            _ => false,
        }
    }

    /// Knock the fighter out. Returns false if it was already dead.
    pub fn die(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        *self = Self::Dead;
        true
    }

    /// Pending heal of the current meal, if any
    pub fn pending_heal(&self) -> Option<i32> {
        match self {
            Self::Eating(meal) => Some(meal.pending_heal),
            _ => None,
        }
    }
}
