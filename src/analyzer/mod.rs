// Analyzer module - prompt construction, request dispatch, result handling

pub mod collector;
pub mod dispatcher;
pub mod prompts;

pub use collector::OutputCollector;
pub use dispatcher::{HttpDispatcher, ResponseDispatcher};
pub use prompts::PromptTemplate;
