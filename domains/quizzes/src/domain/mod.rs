//! Domain layer for quizzes

pub mod entities;
pub mod recommendation;
