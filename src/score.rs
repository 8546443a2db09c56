//! In-memory XP and streak for the running session. Persisting these across
//! sessions belongs to the profile layer, not here.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub xp: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub answered: u32,
    pub correct: u32,
}

/// Result of one submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub xp_gained: u32,
    pub xp: u32,
    pub streak: u32,
}

impl Scoreboard {
    pub fn record(&mut self, correct: bool, xp_per_correct: u32) -> AnswerOutcome {
        self.answered += 1;
        let xp_gained = if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            xp_per_correct
        } else {
            self.streak = 0;
            0
        };
        self.xp = self.xp.saturating_add(xp_gained);
        AnswerOutcome {
            correct,
            xp_gained,
            xp: self.xp,
            streak: self.streak,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_builds_and_breaks() {
        let mut board = Scoreboard::default();
        board.record(true, 10);
        let out = board.record(true, 10);
        assert_eq!(out, AnswerOutcome { correct: true, xp_gained: 10, xp: 20, streak: 2 });

        let out = board.record(false, 10);
        assert_eq!(out.streak, 0);
        assert_eq!(out.xp_gained, 0);
        assert_eq!(board.xp, 20);
        assert_eq!(board.best_streak, 2);
        assert_eq!((board.answered, board.correct), (3, 2));
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Scoreboard::default();
        board.record(true, 15);
        board.reset();
        assert_eq!(board, Scoreboard::default());
    }
}
