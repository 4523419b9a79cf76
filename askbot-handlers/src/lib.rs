//! # Handlers for askbot
//!
//! [`AskQuestionHandler`] stores incoming text and offers the "Ask LLM" button,
//! [`AnswerHandler`] replies with the stored text when the button is pressed, and
//! [`CommandHandler`] answers `/start` and `/help`.

mod answer;
mod ask_question;
mod commands;
pub mod replies;

pub use answer::AnswerHandler;
pub use ask_question::AskQuestionHandler;
pub use commands::CommandHandler;
