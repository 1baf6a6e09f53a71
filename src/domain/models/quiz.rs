#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use super::Symptom;

pub struct QuizOption {
    pub label: &'static str,
    pub symptom: Symptom,
}

pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 3] = [
    QuizQuestion {
        prompt: "What color are the spots on the leaves?",
        options: [
            QuizOption {
                label: "Brown/Dark spots",
                symptom: Symptom::BrownSpots,
            },
            QuizOption {
                label: "White powdery coating",
                symptom: Symptom::WhitePowder,
            },
            QuizOption {
                label: "Orange/Rust colored",
                symptom: Symptom::OrangeSpots,
            },
            QuizOption {
                label: "No spots visible",
                symptom: Symptom::NoSpots,
            },
        ],
    },
    QuizQuestion {
        prompt: "Are the leaves showing any of these signs?",
        options: [
            QuizOption {
                label: "Yellowing and wilting",
                symptom: Symptom::Yellowing,
            },
            QuizOption {
                label: "Curling and distortion",
                symptom: Symptom::LeafCurl,
            },
            QuizOption {
                label: "Dropping prematurely",
                symptom: Symptom::LeafDrop,
            },
            QuizOption {
                label: "Looking normal",
                symptom: Symptom::Normal,
            },
        ],
    },
    QuizQuestion {
        prompt: "How is the plant's overall growth?",
        options: [
            QuizOption {
                label: "Stunted/Slow growth",
                symptom: Symptom::StuntedGrowth,
            },
            QuizOption {
                label: "Reduced yield/flowering",
                symptom: Symptom::ReducedYield,
            },
            QuizOption {
                label: "Normal growth",
                symptom: Symptom::NormalGrowth,
            },
            QuizOption {
                label: "Vigorous growth",
                symptom: Symptom::HealthyGrowth,
            },
        ],
    },
];

/// Linear three question symptom quiz. Answers are kept in question order.
#[derive(Default)]
pub struct SymptomQuiz {
    index: usize,
    answers: Vec<Symptom>,
}

impl SymptomQuiz {
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        return QUIZ_QUESTIONS.get(self.index);
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        return self.index + 1;
    }

    pub fn total(&self) -> usize {
        return QUIZ_QUESTIONS.len();
    }

    pub fn answer(&mut self, option_idx: usize) -> Result<()> {
        let question = match self.current() {
            Some(question) => question,
            None => bail!("The quiz is already complete."),
        };

        let option = match question.options.get(option_idx) {
            Some(option) => option,
            None => bail!("Please select an option"),
        };

        self.answers.push(option.symptom);
        self.index += 1;

        return Ok(());
    }

    pub fn is_complete(&self) -> bool {
        return self.index >= QUIZ_QUESTIONS.len();
    }

    pub fn answers(&self) -> &[Symptom] {
        return &self.answers;
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.answers.clear();
    }
}
