pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::{build_prompt, parse_insight, strip_code_fences};
