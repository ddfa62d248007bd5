//! Network assessment questionnaire
//!
//! Nine fixed Likert questions in three parts:
//! - Part A: overall connectivity
//! - Part B: clustering
//! - Part C: centrality
//!
//! Each part averages to one dimension score (see [`aggregate`]).

pub mod answers;
pub mod question;

pub use answers::{aggregate, AnswerError, AnswerResult, Answers, Selection};
pub use question::{Dimension, Likert, Question};
