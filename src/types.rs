//! Common types used throughout the relaybot bot.

use poise::serenity_prelude::{Channel, UserId};

/// Role of a turn in the conversation sent to the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// Turn written by the human user
    User,
    /// Turn written by the AI assistant
    Assistant,
}

/// Kind of channel a message was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// A text channel or thread inside a server
    Guild,
    /// A one-to-one direct message with the bot
    DirectMessage,
    /// Anything the bot does not recognise
    Other,
}

impl From<&Channel> for ChannelKind {
    fn from(channel: &Channel) -> Self {
        match channel {
            Channel::Guild(_) => ChannelKind::Guild,
            Channel::Private(_) => ChannelKind::DirectMessage,
            _ => ChannelKind::Other,
        }
    }
}

/// A chat message as seen by the router, detached from the Discord client.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub author_id: UserId,
    /// Display tag of the author, only used for log lines.
    pub author_tag: String,
    pub is_from_bot: bool,
    pub channel_kind: ChannelKind,
    pub raw_text: String,
    pub mentions_self: bool,
    /// The bot's own user id, used to locate its mention token.
    pub self_id: UserId,
}

/// One turn of conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: MessageRole,
    pub text: String,
}

impl HistoryTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
        }
    }
}

/// A single request to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Turns preceding the prompt, oldest first.
    pub history: Vec<HistoryTurn>,
    pub max_output_tokens: u32,
}
