pub mod cors;
pub mod quizlet;
