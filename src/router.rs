//! Message triage: toggle commands, eligibility, and relaying AI replies.

mod channel;
mod chunk;
mod command;
mod handler;
mod prompt;
mod replies;
mod state;

pub use channel::{CompletionService, ReplySink};
pub use chunk::{MAX_CHUNK_CHARS, split_into_chunks};
pub use command::ToggleCommand;
pub use handler::MessageRouter;
pub use prompt::extract_prompt;
pub use state::BotState;
