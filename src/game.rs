use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

pub const DECK_SIZE: usize = 8;
pub const PAIR_COUNT: usize = DECK_SIZE / 2;
/// Matched indices (not pairs) needed to reveal the support link.
pub const REWARD_THRESHOLD: usize = 4;
pub const MISMATCH_DELAY_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Coffee,
    Heart,
    Gift,
    Star,
}

impl Symbol {
    pub const ALL: [Symbol; PAIR_COUNT] =
        [Symbol::Coffee, Symbol::Heart, Symbol::Gift, Symbol::Star];

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Coffee => "☕",
            Symbol::Heart => "♥",
            Symbol::Gift => "🎁",
            Symbol::Star => "★",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symbol::Coffee => "coffee",
            Symbol::Heart => "heart",
            Symbol::Gift => "gift",
            Symbol::Star => "star",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Click landed on a locked board or an unflippable card.
    Ignored,
    /// First card of a move turned face up.
    Flipped,
    /// Second card completed a pair.
    Matched,
    /// Second card did not pair; board is locked until resolved.
    Mismatched,
}

/// Four-pair memory game. Holds the whole game state; the UI renders from
/// it and feeds clicks in, so every rule lives here rather than in the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryGame {
    deck: [Symbol; DECK_SIZE],
    flipped: Vec<usize>,
    matched: HashSet<usize>,
    moves: u32,
    locked: bool,
    reward_unlocked: bool,
}

impl MemoryGame {
    /// Unshuffled board. Rendered face-down server-side; the client
    /// replaces it with a shuffled one before the first flip.
    pub fn new() -> Self {
        let mut deck = [Symbol::Coffee; DECK_SIZE];
        for (i, slot) in deck.iter_mut().enumerate() {
            *slot = Symbol::ALL[i % PAIR_COUNT];
        }
        Self::with_deck(deck)
    }

    pub fn with_deck(deck: [Symbol; DECK_SIZE]) -> Self {
        MemoryGame {
            deck,
            flipped: Vec::new(),
            matched: HashSet::new(),
            moves: 0,
            locked: false,
            reward_unlocked: false,
        }
    }

    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut game = Self::new();
        game.deck.shuffle(rng);
        game
    }

    /// New game on a freshly shuffled deck. Clears matches, moves, the
    /// lock, and the reward flag.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::shuffled(rng);
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.locked
            || index >= DECK_SIZE
            || self.flipped.contains(&index)
            || self.matched.contains(&index)
        {
            return FlipOutcome::Ignored;
        }
        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return FlipOutcome::Flipped;
        }
        self.moves += 1;
        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.deck[first] == self.deck[second] {
            self.matched.extend(self.flipped.drain(..));
            if self.matched.len() >= REWARD_THRESHOLD {
                self.reward_unlocked = true;
            }
            FlipOutcome::Matched
        } else {
            self.locked = true;
            FlipOutcome::Mismatched
        }
    }

    /// Turn a mismatched pair back face-down and accept input again.
    /// No-op unless a mismatch is pending, so a stale timer is harmless.
    pub fn resolve_mismatch(&mut self) {
        if !self.locked {
            return;
        }
        self.flipped.clear();
        self.locked = false;
    }

    pub fn deck(&self) -> &[Symbol; DECK_SIZE] {
        &self.deck
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.matched.contains(&index)
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched.len() / 2
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn reward_unlocked(&self) -> bool {
        self.reward_unlocked
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn deck_of(ids: [usize; DECK_SIZE]) -> [Symbol; DECK_SIZE] {
        ids.map(|i| Symbol::ALL[i])
    }

    #[test]
    fn test_new_deck_holds_two_of_each_symbol() {
        let game = MemoryGame::new();
        for symbol in Symbol::ALL {
            let count = game.deck().iter().filter(|&&s| s == symbol).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_matching_pair_locks_in_and_counts_one_move() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        assert_eq!(game.flip(0), FlipOutcome::Flipped);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.flip(2), FlipOutcome::Matched);
        assert_eq!(game.moves(), 1);
        assert!(game.is_matched(0));
        assert!(game.is_matched(2));
        assert!(!game.locked());
        assert!(!game.reward_unlocked());
    }

    #[test]
    fn test_second_pair_reaches_reward_threshold() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        game.flip(0);
        game.flip(2);
        assert!(!game.reward_unlocked());
        assert_eq!(game.flip(1), FlipOutcome::Flipped);
        assert_eq!(game.flip(4), FlipOutcome::Matched);
        assert_eq!(game.matched_pairs(), 2);
        assert!(game.reward_unlocked());
        // Monotonic: later mismatches do not clear it.
        game.flip(3);
        game.flip(5);
        assert!(game.reward_unlocked());
    }

    #[test]
    fn test_mismatch_locks_until_resolved() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        assert_eq!(game.flip(0), FlipOutcome::Flipped);
        assert_eq!(game.flip(1), FlipOutcome::Mismatched);
        assert_eq!(game.moves(), 1);
        assert!(game.locked());
        // Both stay face up while the board waits on the resolve delay.
        assert!(game.is_face_up(0));
        assert!(game.is_face_up(1));
        assert_eq!(game.flip(3), FlipOutcome::Ignored);
        assert_eq!(game.moves(), 1);

        game.resolve_mismatch();
        assert!(!game.locked());
        assert!(!game.is_face_up(0));
        assert!(!game.is_face_up(1));
        assert_eq!(game.matched_pairs(), 0);
        assert_eq!(game.flip(3), FlipOutcome::Flipped);
    }

    #[test]
    fn test_resolve_without_pending_mismatch_is_a_noop() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        game.flip(0);
        game.resolve_mismatch();
        // The single face-up card survives a stray resolve.
        assert!(game.is_face_up(0));
        assert_eq!(game.flip(2), FlipOutcome::Matched);
    }

    #[test]
    fn test_flips_on_flipped_and_matched_cards_are_ignored() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        game.flip(0);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        game.flip(2);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        assert_eq!(game.flip(2), FlipOutcome::Ignored);
        assert_eq!(game.flip(DECK_SIZE), FlipOutcome::Ignored);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_full_clear_leaves_game_playable() {
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        for (a, b) in [(0, 2), (1, 4), (3, 6), (5, 7)] {
            assert_eq!(game.flip(a), FlipOutcome::Flipped);
            assert_eq!(game.flip(b), FlipOutcome::Matched);
        }
        assert_eq!(game.matched_pairs(), PAIR_COUNT);
        assert_eq!(game.moves(), 4);
        assert!(game.reward_unlocked());
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn test_reset_restores_a_fresh_face_down_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = MemoryGame::with_deck(deck_of([0, 1, 0, 2, 1, 3, 2, 3]));
        game.flip(0);
        game.flip(2);
        game.flip(1);
        game.flip(4);
        assert!(game.reward_unlocked());
        game.reset(&mut rng);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.matched_pairs(), 0);
        assert!(!game.reward_unlocked());
        assert!(!game.locked());
        for i in 0..DECK_SIZE {
            assert!(!game.is_face_up(i));
        }
        for symbol in Symbol::ALL {
            assert_eq!(game.deck().iter().filter(|&&s| s == symbol).count(), 2);
        }
    }

    #[test]
    fn test_reset_shuffles_uniformly_over_arrangements() {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
        let trials = 252_000u32;
        let mut counts: HashMap<[Symbol; DECK_SIZE], u32> = HashMap::new();
        let mut game = MemoryGame::new();
        for _ in 0..trials {
            game.reset(&mut rng);
            *counts.entry(*game.deck()).or_insert(0) += 1;
        }
        // Eight cards in four pairs give 8! / 2^4 = 2520 distinct decks,
        // 100 expected hits each at this trial count.
        assert_eq!(counts.len(), 2520);
        let expected = f64::from(trials) / 2520.0;
        let chi2: f64 = counts
            .values()
            .map(|&c| {
                let d = f64::from(c) - expected;
                d * d / expected
            })
            .sum();
        // 2519 degrees of freedom: mean 2519, sd about 71. A biased
        // shuffle lands orders of magnitude higher.
        assert!(chi2 < 3000.0, "chi-square {chi2} too large for a uniform shuffle");
    }
}
