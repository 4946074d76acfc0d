//! Prompt templates for every text-generation call the interview makes.

mod template;

pub use template::PromptTemplate;
