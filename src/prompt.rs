mod completion_render;
mod completion_state;
mod help_line_render;
mod input_state;
mod prompt_events;
mod prompt_render;
mod prompt_state;


pub use completion_state::CompletionState;
pub use input_state::InputState;
pub use prompt_state::Prompt;
