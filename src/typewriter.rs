/// Milliseconds between character reveals/deletions.
pub const TYPE_TICK_MS: u32 = 150;
/// Pause with the full name on screen before deletion starts.
pub const HOLD_AFTER_TYPE_MS: u32 = 2000;
/// Pause with an empty display before the next name starts typing.
pub const HOLD_AFTER_DELETE_MS: u32 = 1000;
/// Caret blink half-period.
pub const CARET_BLINK_MS: u64 = 500;
/// Cadence of the driving interval; divides every delay above.
pub const DRIVER_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    HoldAfterType,
    Deleting,
    HoldAfterDelete,
}

/// Cycles through a list of names, typing and deleting them character by
/// character. The machine never reads a clock; callers feed elapsed time
/// into [`Typewriter::tick`] and mirror [`Typewriter::text`] into the UI
/// when it reports a change.
#[derive(Debug, Clone)]
pub struct Typewriter {
    names: Vec<String>,
    name_idx: usize,
    shown_chars: usize,
    phase: Phase,
    // Time left until the next step fires.
    wait_ms: u32,
}

impl Typewriter {
    pub fn new(names: Vec<String>) -> Self {
        debug_assert!(!names.is_empty(), "typewriter needs at least one name");
        Typewriter {
            names,
            name_idx: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            wait_ms: TYPE_TICK_MS,
        }
    }

    /// Advance the machine by `elapsed_ms`, performing as many steps as fit.
    /// Returns true if the display text changed.
    pub fn tick(&mut self, mut elapsed_ms: u32) -> bool {
        let mut changed = false;
        while elapsed_ms >= self.wait_ms {
            elapsed_ms -= self.wait_ms;
            changed |= self.step();
        }
        self.wait_ms -= elapsed_ms;
        changed
    }

    // One scheduled callback: mutate state, arm the next delay, report
    // whether the visible text moved.
    fn step(&mut self) -> bool {
        let name_len = self.current_name().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown_chars < name_len {
                    self.shown_chars += 1;
                    self.wait_ms = TYPE_TICK_MS;
                    true
                } else {
                    self.phase = Phase::HoldAfterType;
                    self.wait_ms = HOLD_AFTER_TYPE_MS;
                    false
                }
            }
            Phase::HoldAfterType => {
                // Expiry only flips the direction; the character cadence
                // resumes on the next step.
                self.phase = Phase::Deleting;
                self.wait_ms = TYPE_TICK_MS;
                false
            }
            Phase::Deleting => {
                if self.shown_chars > 0 {
                    self.shown_chars -= 1;
                    self.wait_ms = TYPE_TICK_MS;
                    true
                } else {
                    self.phase = Phase::HoldAfterDelete;
                    self.wait_ms = HOLD_AFTER_DELETE_MS;
                    false
                }
            }
            Phase::HoldAfterDelete => {
                self.name_idx = (self.name_idx + 1) % self.names.len();
                self.phase = Phase::Typing;
                self.shown_chars = 0;
                self.wait_ms = TYPE_TICK_MS;
                false
            }
        }
    }

    fn current_name(&self) -> &str {
        &self.names[self.name_idx]
    }

    /// The currently revealed prefix of the active name.
    pub fn text(&self) -> String {
        self.current_name().chars().take(self.shown_chars).collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn name_index(&self) -> usize {
        self.name_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Typewriter {
        Typewriter::new(vec!["Tafara".to_string(), "Mutsvedu".to_string()])
    }

    #[test]
    fn test_types_first_name_then_holds() {
        let mut tw = machine();
        for i in 1..=6 {
            assert!(tw.tick(TYPE_TICK_MS));
            assert_eq!(tw.text(), "Tafara"[..i].to_string());
        }
        assert_eq!(tw.text(), "Tafara");
        assert_eq!(tw.phase(), Phase::Typing);
        // Seventh tick notices completion and arms the long hold.
        assert!(!tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.phase(), Phase::HoldAfterType);
        assert_eq!(tw.text(), "Tafara");
    }

    #[test]
    fn test_hold_expiry_flips_direction_without_deleting() {
        let mut tw = machine();
        tw.tick(TYPE_TICK_MS * 7);
        assert_eq!(tw.phase(), Phase::HoldAfterType);
        // Nothing moves while the hold runs down.
        assert!(!tw.tick(HOLD_AFTER_TYPE_MS - 1));
        assert_eq!(tw.text(), "Tafara");
        assert!(!tw.tick(1));
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "Tafara");
        assert!(tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.text(), "Tafar");
    }

    #[test]
    fn test_seven_deletion_ticks_empty_the_display() {
        let mut tw = machine();
        tw.tick(TYPE_TICK_MS * 7);
        tw.tick(HOLD_AFTER_TYPE_MS);
        // Six deletions empty the display, the seventh notices it.
        for expected in ["Tafar", "Tafa", "Taf", "Ta", "T", ""] {
            assert!(tw.tick(TYPE_TICK_MS));
            assert_eq!(tw.text(), expected);
        }
        assert!(!tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.phase(), Phase::HoldAfterDelete);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_advances_to_next_name_and_wraps() {
        let mut tw = machine();
        tw.tick(TYPE_TICK_MS * 7);
        tw.tick(HOLD_AFTER_TYPE_MS);
        tw.tick(TYPE_TICK_MS * 7);
        assert_eq!(tw.phase(), Phase::HoldAfterDelete);
        assert!(!tw.tick(HOLD_AFTER_DELETE_MS));
        assert_eq!(tw.name_index(), 1);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert!(tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.text(), "M");
        assert!(tw.tick(TYPE_TICK_MS * 7));
        assert_eq!(tw.text(), "Mutsvedu");

        // Run the second name all the way out and confirm the wrap.
        assert!(!tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.phase(), Phase::HoldAfterType);
        tw.tick(HOLD_AFTER_TYPE_MS);
        tw.tick(TYPE_TICK_MS * 9);
        assert_eq!(tw.phase(), Phase::HoldAfterDelete);
        tw.tick(HOLD_AFTER_DELETE_MS);
        assert_eq!(tw.name_index(), 0);
        assert_eq!(tw.text(), "");
        tw.tick(TYPE_TICK_MS);
        assert_eq!(tw.text(), "T");
    }

    #[test]
    fn test_small_ticks_accumulate_like_large_ones() {
        let mut fine = machine();
        let mut coarse = machine();
        let total = TYPE_TICK_MS * 7 + HOLD_AFTER_TYPE_MS + TYPE_TICK_MS * 3;
        for _ in 0..(total / DRIVER_TICK_MS as u32) {
            fine.tick(DRIVER_TICK_MS as u32);
        }
        coarse.tick(total);
        assert_eq!(fine.text(), coarse.text());
        assert_eq!(fine.phase(), coarse.phase());
    }

    #[test]
    fn test_empty_name_cycles_without_underflow() {
        let mut tw = Typewriter::new(vec![String::new(), "Jo".to_string()]);
        // Empty name: typing notices completion immediately.
        assert!(!tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.phase(), Phase::HoldAfterType);
        assert!(!tw.tick(HOLD_AFTER_TYPE_MS));
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.text(), "");
        assert!(!tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.phase(), Phase::HoldAfterDelete);
        assert!(!tw.tick(HOLD_AFTER_DELETE_MS));
        assert_eq!(tw.name_index(), 1);
        assert!(tw.tick(TYPE_TICK_MS));
        assert_eq!(tw.text(), "J");
    }

    #[test]
    fn test_multibyte_names_reveal_by_character() {
        let mut tw = Typewriter::new(vec!["Zoë".to_string()]);
        tw.tick(TYPE_TICK_MS * 3);
        assert_eq!(tw.text(), "Zoë");
    }
}
