//! Problem templates for the quiz
//!
//! Three closed-form constant-acceleration formulas with small integer
//! parameters, so every answer is exactly representable and the epsilon
//! check only has to absorb the player's decimal input.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The three formula templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemTemplate {
    /// s = ut + ½at²
    Displacement,
    /// v = u + at
    FinalVelocity,
    /// F = ma
    Force,
}

impl ProblemTemplate {
    pub const ALL: [ProblemTemplate; 3] = [
        ProblemTemplate::Displacement,
        ProblemTemplate::FinalVelocity,
        ProblemTemplate::Force,
    ];

    /// Formula hint shown under the problem text
    pub fn formula(&self) -> &'static str {
        match self {
            ProblemTemplate::Displacement => "s = ut + ½at²",
            ProblemTemplate::FinalVelocity => "v = u + at",
            ProblemTemplate::Force => "F = ma",
        }
    }
}

/// A generated problem: prompt, hint, and the expected answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub template: ProblemTemplate,
    pub text: String,
    pub formula: String,
    pub answer: f64,
}

/// Generate a random problem from one of the three templates
pub fn generate_problem<R: Rng>(rng: &mut R) -> Problem {
    let template = ProblemTemplate::ALL[rng.random_range(0..ProblemTemplate::ALL.len())];
    match template {
        ProblemTemplate::Displacement => {
            let u = rng.random_range(1..=10) as f64;
            let t = rng.random_range(2..=6) as f64;
            let a = rng.random_range(1..=5) as f64;
            let s = u * t + 0.5 * a * t * t;
            Problem {
                template,
                text: format!(
                    "An object starts at {u} m/s with constant acceleration {a} m/s² \
                     and moves for {t} s. How far does it travel (m)?"
                ),
                formula: template.formula().to_string(),
                answer: s,
            }
        }
        ProblemTemplate::FinalVelocity => {
            let u = rng.random_range(0..=19) as f64;
            let a = rng.random_range(1..=10) as f64;
            let t = rng.random_range(1..=10) as f64;
            let v = u + a * t;
            Problem {
                template,
                text: format!(
                    "A car moving at {u} m/s accelerates at a constant {a} m/s². \
                     What is its speed after {t} s (m/s)?"
                ),
                formula: template.formula().to_string(),
                answer: v,
            }
        }
        ProblemTemplate::Force => {
            let m = rng.random_range(10..=59) as f64;
            let a = rng.random_range(2..=11) as f64;
            let f = m * a;
            Problem {
                template,
                text: format!(
                    "What force (N) accelerates a {m} kg mass at {a} m/s²?"
                ),
                formula: template.formula().to_string(),
                answer: f,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_all_templates_appear() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let p = generate_problem(&mut rng);
            let idx = ProblemTemplate::ALL
                .iter()
                .position(|t| *t == p.template)
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_displacement_answer_range() {
        // u ∈ 1..=10, t ∈ 2..=6, a ∈ 1..=5:
        // min = 1*2 + 0.5*1*4 = 4, max = 10*6 + 0.5*5*36 = 150
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..500 {
            let p = generate_problem(&mut rng);
            if p.template == ProblemTemplate::Displacement {
                assert!(p.answer >= 4.0 && p.answer <= 150.0, "s = {}", p.answer);
                // Half-integer grid: 2*s is a whole number
                assert_eq!((p.answer * 2.0).fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_final_velocity_answer_range() {
        // u ∈ 0..=19, a ∈ 1..=10, t ∈ 1..=10: min = 0 + 1*1 = 1, max = 19 + 100 = 119
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let p = generate_problem(&mut rng);
            if p.template == ProblemTemplate::FinalVelocity {
                assert!(p.answer >= 1.0 && p.answer <= 119.0, "v = {}", p.answer);
                assert_eq!(p.answer.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_force_answer_range() {
        // m ∈ 10..=59, a ∈ 2..=11: min = 20, max = 649
        let mut rng = Pcg32::seed_from_u64(4);
        for _ in 0..500 {
            let p = generate_problem(&mut rng);
            if p.template == ProblemTemplate::Force {
                assert!(p.answer >= 20.0 && p.answer <= 649.0, "F = {}", p.answer);
                assert_eq!(p.answer.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_problem_text_mentions_parameters() {
        let mut rng = Pcg32::seed_from_u64(5);
        let p = generate_problem(&mut rng);
        assert!(!p.text.is_empty());
        assert!(!p.formula.is_empty());
    }
}
