//! CLI commands

mod completions;
mod convert;
mod detect;
mod parse;
mod render;

pub use completions::CompletionsCommand;
pub use convert::ConvertCommand;
pub use detect::DetectCommand;
pub use parse::ParseCommand;
pub use render::RenderCommand;
