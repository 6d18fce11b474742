pub mod tokenizer;

pub use tokenizer::{TermCounts, Tokenizer, TokenizerConfig};
