//! Answer sheet and score aggregation

use super::question::{Dimension, Likert, Question};
use orgnet_match::ScoreTriple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a compact answer list
#[derive(Error, Debug, PartialEq)]
pub enum AnswerError {
    #[error("Expected {expected} answers, got {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("Answer {position} is not a level between 1 and 5: {value:?}")]
    InvalidLevel { position: usize, value: String },
}

pub type AnswerResult<T> = Result<T, AnswerError>;

/// One answer per question, every question pre-set to [`Likert::Medium`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Answers {
    levels: [Likert; 9],
}

/// A question together with the option label chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub question: Question,
    pub level: Likert,
    pub label: String,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: Question) -> Likert {
        self.levels[question.index()]
    }

    pub fn set(&mut self, question: Question, level: Likert) {
        self.levels[question.index()] = level;
    }

    pub fn with(mut self, question: Question, level: Likert) -> Self {
        self.set(question, level);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Question, Likert)> + '_ {
        Question::ALL.iter().map(move |&q| (q, self.get(q)))
    }

    /// Chosen option label per question, in questionnaire order
    pub fn selections(&self) -> Vec<Selection> {
        self.iter()
            .map(|(question, level)| Selection {
                question,
                level,
                label: question.option_label(level).to_string(),
            })
            .collect()
    }

    /// Mean of the dimension's three answers
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        let levels = dimension.questions().map(|q| self.get(q));
        mean(&levels)
    }
}

fn mean(levels: &[Likert]) -> f64 {
    let total: u32 = levels.iter().map(|l| l.value() as u32).sum();
    total as f64 / levels.len() as f64
}

/// Reduce an answer sheet to (connectivity, clustering, centrality)
pub fn aggregate(answers: &Answers) -> ScoreTriple {
    ScoreTriple::new(
        answers.dimension_score(Dimension::Connectivity),
        answers.dimension_score(Dimension::Clustering),
        answers.dimension_score(Dimension::Centrality),
    )
}

/// Parses nine comma-separated levels in questionnaire order, e.g. `3,3,3,4,4,4,2,2,2`.
/// Whitespace around each level is ignored.
impl FromStr for Answers {
    type Err = AnswerError;

    fn from_str(s: &str) -> AnswerResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != Question::ALL.len() {
            return Err(AnswerError::WrongCount {
                expected: Question::ALL.len(),
                found: parts.len(),
            });
        }

        let mut answers = Answers::new();
        for (i, (part, question)) in parts.iter().zip(Question::ALL).enumerate() {
            let level = part
                .parse::<u8>()
                .ok()
                .and_then(Likert::from_value)
                .ok_or_else(|| AnswerError::InvalidLevel {
                    position: i + 1,
                    value: part.to_string(),
                })?;
            answers.set(question, level);
        }
        Ok(answers)
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels: Vec<String> = self.levels.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", levels.join(","))
    }
}
