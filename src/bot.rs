//! Discord client setup and event dispatch.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use poise::{
    Framework, FrameworkError, FrameworkOptions, builtins,
    serenity_prelude::{
        ClientBuilder, Context, FullEvent, GatewayIntents, Message as SerenityMessage,
    },
};

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::gemini::GeminiClient;
use crate::router::{CompletionService, MessageRouter, ReplySink};
use crate::types::{ChannelKind, IncomingMessage};

struct Data {
    router: MessageRouter,
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    let completion: Option<Box<dyn CompletionService>> = match config.gemini_api_key {
        Some(api_key) => {
            debug!("Initializing Gemini client");
            Some(Box::new(GeminiClient::new(api_key, config.gemini_model)?))
        }
        None => None,
    };
    let router = MessageRouter::new(config.owner_id, completion);

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                Ok(Data { router })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

/// Replies to the Discord message currently being handled.
struct DiscordReply<'a> {
    ctx: &'a Context,
    message: &'a SerenityMessage,
}

#[async_trait]
impl ReplySink for DiscordReply<'_> {
    async fn reply(&self, text: &str) -> Result<()> {
        self.message.reply(&self.ctx.http, text).await?;
        Ok(())
    }

    async fn start_typing(&self) -> Result<()> {
        self.message
            .channel_id
            .broadcast_typing(&self.ctx.http)
            .await?;
        Ok(())
    }
}

/// Works out where a message was posted.
///
/// Messages carrying a guild id are guild messages; anything else is looked
/// up so direct messages can be told apart from unknown channel types.
async fn resolve_channel_kind(ctx: &Context, message: &SerenityMessage) -> ChannelKind {
    if message.guild_id.is_some() {
        return ChannelKind::Guild;
    }

    match message.channel_id.to_channel(ctx).await {
        Ok(channel) => ChannelKind::from(&channel),
        Err(e) => {
            warn!(
                "Failed to resolve channel {} for message {}: {e}",
                message.channel_id, message.id
            );
            ChannelKind::Other
        }
    }
}

async fn incoming_message(ctx: &Context, message: &SerenityMessage) -> IncomingMessage {
    let self_id = ctx.cache.current_user().id;

    IncomingMessage {
        author_id: message.author.id,
        author_tag: message.author.tag(),
        is_from_bot: message.author.bot,
        channel_kind: resolve_channel_kind(ctx, message).await,
        raw_text: message.content.clone(),
        mentions_self: message.mentions_user_id(self_id),
        self_id,
    }
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!("Bot online as {}!", data_about_bot.user.tag());
            if !data.router.state().is_active() {
                info!("The bot is currently disabled. DM \"Ativar bot\" to enable it again.");
            }
        }
        FullEvent::Message { new_message } => {
            // Skip bot traffic before touching the API for channel lookups
            if new_message.author.bot {
                return Ok(());
            }

            let incoming = incoming_message(ctx, new_message).await;
            let sink = DiscordReply {
                ctx,
                message: new_message,
            };
            data.router.handle(&incoming, &sink).await?;
        }
        _ => {}
    }
    Ok(())
}

async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Discord client error while handling {} event: {error}",
                event.snake_case_name()
            );
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
