pub mod handlers;
pub mod keywords;
pub mod prompts;
