//! Per-message triage.

use log::{debug, error, info};
use poise::serenity_prelude::UserId;

use crate::error::Result;
use crate::types::{ChannelKind, CompletionRequest, IncomingMessage};

use super::channel::{CompletionService, ReplySink};
use super::chunk::{MAX_CHUNK_CHARS, split_into_chunks};
use super::command::ToggleCommand;
use super::prompt::extract_prompt;
use super::replies;
use super::state::BotState;

/// Decides what, if anything, to say in response to each incoming message.
pub struct MessageRouter {
    state: BotState,
    owner_id: Option<UserId>,
    completion: Option<Box<dyn CompletionService>>,
}

impl MessageRouter {
    #[must_use]
    pub fn new(owner_id: Option<UserId>, completion: Option<Box<dyn CompletionService>>) -> Self {
        Self {
            state: BotState::new(),
            owner_id,
            completion,
        }
    }

    #[must_use]
    pub fn state(&self) -> &BotState {
        &self.state
    }

    /// Handles one incoming message.
    ///
    /// Completion failures are answered with an apology and never returned.
    /// An error is only returned when delivering a reply fails.
    pub async fn handle(&self, message: &IncomingMessage, sink: &dyn ReplySink) -> Result<()> {
        if message.is_from_bot {
            return Ok(());
        }

        let is_direct = message.channel_kind == ChannelKind::DirectMessage;

        if is_direct
            && self.owner_id == Some(message.author_id)
            && let Some(command) = ToggleCommand::parse(&message.raw_text)
        {
            self.state.set_active(command.activates());
            let ack = if command.activates() {
                replies::ENABLED_ACK
            } else {
                replies::DISABLED_ACK
            };
            sink.reply(ack).await?;
            info!("Bot {} by {}", status_word(command), message.author_tag);
            return Ok(());
        }

        if !self.state.is_active() {
            debug!(
                "Ignoring message from {} while inactive",
                message.author_tag
            );
            return Ok(());
        }

        if !(message.mentions_self || is_direct) {
            return Ok(());
        }

        info!(
            "Received message from {} ({:?}): {}",
            message.author_tag, message.channel_kind, message.raw_text
        );

        let prompt = extract_prompt(&message.raw_text, message.self_id, message.mentions_self);
        if prompt.is_empty() {
            let text = if message.mentions_self {
                replies::GREETING
            } else {
                replies::EMPTY_DIRECT_MESSAGE
            };
            sink.reply(text).await?;
            return Ok(());
        }

        let Some(completion) = self.completion.as_deref() else {
            sink.reply(replies::SERVICE_UNAVAILABLE).await?;
            return Ok(());
        };

        if let Err(e) = sink.start_typing().await {
            debug!("Failed to broadcast typing indicator: {e}");
        }

        let request = CompletionRequest {
            prompt,
            history: replies::priming_history(),
            max_output_tokens: replies::MAX_OUTPUT_TOKENS,
        };

        match completion.complete(request).await {
            Ok(text) if text.is_empty() => {
                sink.reply(replies::NO_USEFUL_RESPONSE).await?;
            }
            Ok(text) => {
                let chunks = split_into_chunks(&text, MAX_CHUNK_CHARS);
                debug!("Replying in {} chunk(s)", chunks.len());
                for chunk in chunks {
                    sink.reply(chunk).await?;
                }
                info!(
                    "Replied to {} with {} characters",
                    message.author_tag,
                    text.chars().count()
                );
            }
            Err(e) => {
                error!(
                    "Error calling the completion service for {}: {e}",
                    message.author_tag
                );
                sink.reply(replies::COMPLETION_FAILED).await?;
            }
        }

        Ok(())
    }
}

fn status_word(command: ToggleCommand) -> &'static str {
    match command {
        ToggleCommand::Enable => "enabled",
        ToggleCommand::Disable => "disabled",
    }
}
