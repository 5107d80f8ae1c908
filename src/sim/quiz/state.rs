//! Quiz game state
//!
//! Countdown timer plus the current problem. The timer is a plain
//! decrement-and-compare against the fixed per-problem limit; there is
//! no state machine beyond Active / GameOver.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::problems::{Problem, generate_problem};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Active,
    GameOver,
}

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    /// Submission ignored (game already over)
    Ignored,
}

/// Complete quiz state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u64,
    /// Seconds left on the current problem
    pub time_left: f32,
    pub phase: QuizPhase,
    pub problem: Problem,
    /// Problems served so far (feeds the per-problem RNG stream)
    pub problems_served: u32,
}

impl QuizState {
    /// Create a new quiz with the given seed and serve the first problem
    pub fn new(seed: u64) -> Self {
        let problem = generate_problem(&mut problem_rng(seed, 0));
        Self {
            seed,
            score: 0,
            time_left: QUIZ_MAX_TIME,
            phase: QuizPhase::Active,
            problem,
            problems_served: 1,
        }
    }

    /// Advance the countdown; expiry ends the game
    pub fn tick(&mut self, dt: f32) {
        if self.phase != QuizPhase::Active {
            return;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.phase = QuizPhase::GameOver;
            log::info!("Quiz over (timeout): score {}", self.score);
        }
    }

    /// Check a submitted answer against the fixed epsilon
    ///
    /// Correct answers score a point and serve the next problem with a
    /// fresh timer; a wrong answer ends the game.
    pub fn check_answer(&mut self, user_answer: f64) -> AnswerOutcome {
        if self.phase != QuizPhase::Active {
            return AnswerOutcome::Ignored;
        }

        if (user_answer - self.problem.answer).abs() < ANSWER_EPSILON {
            self.score += 1;
            self.next_problem();
            AnswerOutcome::Correct
        } else {
            self.phase = QuizPhase::GameOver;
            log::info!(
                "Quiz over (wrong answer {} vs {}): score {}",
                user_answer,
                self.problem.answer,
                self.score
            );
            AnswerOutcome::Wrong
        }
    }

    /// Fraction of time remaining, for the timer bar (0..=1)
    pub fn timer_fraction(&self) -> f32 {
        (self.time_left / QUIZ_MAX_TIME).clamp(0.0, 1.0)
    }

    fn next_problem(&mut self) {
        self.problem = generate_problem(&mut problem_rng(self.seed, self.problems_served));
        self.problems_served += 1;
        self.time_left = QUIZ_MAX_TIME;
    }
}

/// RNG stream for the nth problem, a pure function of seed and index
fn problem_rng(seed: u64, index: u32) -> Pcg32 {
    Pcg32::seed_from_u64(seed.wrapping_add((index as u64).wrapping_mul(2654435761)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quiz_is_active_with_full_timer() {
        let state = QuizState::new(42);
        assert_eq!(state.phase, QuizPhase::Active);
        assert_eq!(state.time_left, QUIZ_MAX_TIME);
        assert_eq!(state.score, 0);
        assert_eq!(state.timer_fraction(), 1.0);
    }

    #[test]
    fn test_timer_expiry_ends_game() {
        let mut state = QuizState::new(42);
        // 16 seconds of ticking at 120 Hz
        for _ in 0..(16 * 120) {
            state.tick(SIM_DT);
        }
        assert_eq!(state.phase, QuizPhase::GameOver);
        assert_eq!(state.time_left, 0.0);
    }

    #[test]
    fn test_correct_answer_scores_and_resets_timer() {
        let mut state = QuizState::new(42);
        state.time_left = 3.0;
        let answer = state.problem.answer;

        let outcome = state.check_answer(answer);
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert_eq!(state.score, 1);
        assert_eq!(state.time_left, QUIZ_MAX_TIME);
        assert_eq!(state.phase, QuizPhase::Active);
    }

    #[test]
    fn test_wrong_answer_ends_game() {
        let mut state = QuizState::new(42);
        let answer = state.problem.answer;

        let outcome = state.check_answer(answer + 1.0);
        assert_eq!(outcome, AnswerOutcome::Wrong);
        assert_eq!(state.phase, QuizPhase::GameOver);
        assert_eq!(state.score, 0);
        // Correct answer stays available for the game-over screen
        assert_eq!(state.problem.answer, answer);
    }

    #[test]
    fn test_epsilon_boundary() {
        let mut state = QuizState::new(7);
        let answer = state.problem.answer;
        assert_eq!(state.check_answer(answer + 0.005), AnswerOutcome::Correct);

        let answer = state.problem.answer;
        assert_eq!(state.check_answer(answer + 0.02), AnswerOutcome::Wrong);
    }

    #[test]
    fn test_nan_answer_is_wrong() {
        // Unparseable input reaches the sim as NaN and loses the game
        let mut state = QuizState::new(42);
        assert_eq!(state.check_answer(f64::NAN), AnswerOutcome::Wrong);
        assert_eq!(state.phase, QuizPhase::GameOver);
    }

    #[test]
    fn test_submissions_ignored_after_game_over() {
        let mut state = QuizState::new(42);
        state.check_answer(state.problem.answer + 1.0);
        assert_eq!(state.phase, QuizPhase::GameOver);

        let score = state.score;
        assert_eq!(
            state.check_answer(state.problem.answer),
            AnswerOutcome::Ignored
        );
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = QuizState::new(42);
        let answer = state.problem.answer;
        state.check_answer(answer);

        let json = serde_json::to_string(&state).unwrap();
        let back: QuizState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, state.score);
        assert_eq!(back.problem.text, state.problem.text);
        assert_eq!(back.problem.formula, state.problem.formula);
        assert_eq!(back.problem.answer, state.problem.answer);
    }

    #[test]
    fn test_problem_sequence_is_seed_deterministic() {
        let mut a = QuizState::new(1234);
        let mut b = QuizState::new(1234);
        for _ in 0..20 {
            assert_eq!(a.problem.text, b.problem.text);
            assert_eq!(a.problem.answer, b.problem.answer);
            let answer = a.problem.answer;
            a.check_answer(answer);
            b.check_answer(answer);
        }
    }
}
