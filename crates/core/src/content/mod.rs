mod grammar;
pub mod site;
mod words;

pub use grammar::grammar_quiz;
pub use words::pronunciation_words;
