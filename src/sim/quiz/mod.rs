//! Timed physics quiz
//!
//! A 15-second countdown gates each problem. Problems come from three
//! closed-form kinematics templates; answers are checked against a fixed
//! floating-point epsilon. One wrong answer or an expired timer ends the
//! game.

pub mod problems;
pub mod state;

pub use problems::{Problem, ProblemTemplate, generate_problem};
pub use state::{AnswerOutcome, QuizPhase, QuizState};
