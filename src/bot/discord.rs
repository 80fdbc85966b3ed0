// src/bot/discord.rs - Discord gateway client and slash command transport

use serenity::all::{
    Command, CommandInteraction, Context, CreateAttachment, CreateCommand, CreateEmbed,
    CreateEmbedAuthor, CreateEmbedFooter, CreateInteractionResponseFollowup, EventHandler,
    GatewayIntents, Interaction, Ready,
};
use serenity::model::{Colour, Timestamp};
use serenity::{Client, async_trait};
use tracing::{error, info, warn};

use super::command::{Responder, handle_servers_command};
use crate::config::Config;
use crate::constants::texts::{
    COMMAND_DESCRIPTION, COMMAND_NAME, EMBED_AUTHOR, ICON_ATTACHMENT_NAME,
};
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::data_fetcher::{HttpServerSource, SteamNameResolver};
use crate::embed_ui::{LayoutLimits, RenderedDocument};
use crate::error::AppError;

fn icon_url() -> String {
    format!("attachment://{ICON_ATTACHMENT_NAME}")
}

/// Converts a rendered document into a Discord embed, stamped with the send time.
pub fn build_embed(document: &RenderedDocument) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(&document.title)
        .description(&document.description)
        .colour(Colour::RED)
        .timestamp(Timestamp::now())
        .author(CreateEmbedAuthor::new(EMBED_AUTHOR).icon_url(icon_url()))
        .thumbnail(icon_url());

    document
        .fields()
        .fold(embed, |embed, field| {
            embed.field(field.field_name(), &field.body, false)
        })
        .footer(CreateEmbedFooter::new(&document.footer))
}

/// Replies to one slash command invocation through follow-up messages.
pub struct DiscordResponder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    icon_path: &'a str,
}

impl<'a> DiscordResponder<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction, icon_path: &'a str) -> Self {
        Self {
            ctx,
            command,
            icon_path,
        }
    }

    async fn icon_attachment(&self) -> Result<CreateAttachment, AppError> {
        let data = tokio::fs::read(self.icon_path).await?;
        Ok(CreateAttachment::bytes(data, ICON_ATTACHMENT_NAME))
    }
}

impl Responder for DiscordResponder<'_> {
    async fn acknowledge(&self) -> Result<(), AppError> {
        self.command.defer(&self.ctx.http).await?;
        Ok(())
    }

    async fn send_document(&self, document: &RenderedDocument) -> Result<(), AppError> {
        let icon = self.icon_attachment().await?;
        let followup = CreateInteractionResponseFollowup::new()
            .embed(build_embed(document))
            .add_file(icon);
        self.command.create_followup(&self.ctx.http, followup).await?;
        Ok(())
    }

    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        let followup = CreateInteractionResponseFollowup::new().content(text);
        self.command.create_followup(&self.ctx.http, followup).await?;
        Ok(())
    }
}

/// Gateway event handler owning the per-process collaborators.
pub struct Handler {
    source: HttpServerSource,
    resolver: SteamNameResolver,
    icon_path: String,
    limits: LayoutLimits,
}

impl Handler {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self {
            source: HttpServerSource::new(client.clone(), config.api_url.clone()),
            resolver: SteamNameResolver::from_config(client, config),
            icon_path: config.icon_path.clone(),
            limits: LayoutLimits::default(),
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let command = CreateCommand::new(COMMAND_NAME).description(COMMAND_DESCRIPTION);
        match Command::create_global_command(&ctx.http, command).await {
            Ok(_) => info!("Registered /{COMMAND_NAME} command"),
            Err(e) => error!("Failed to register /{COMMAND_NAME} command: {e}"),
        }
        info!("Logged in as {}", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != COMMAND_NAME {
            warn!("Ignoring unknown command /{}", command.data.name);
            return;
        }

        info!("/{COMMAND_NAME} invoked by {}", command.user.name);
        let responder = DiscordResponder::new(&ctx, &command, &self.icon_path);
        handle_servers_command(&self.source, &self.resolver, &responder, &self.limits).await;
    }
}

/// Connects to the Discord gateway and serves the slash command until shutdown.
pub async fn run(config: &Config) -> Result<(), AppError> {
    let token = config.require_bot_token()?;
    let handler = Handler::from_config(config)?;

    if !handler.resolver.is_enabled() {
        warn!("No Steam API key configured, players without a local name show placeholders");
    }

    let mut client = Client::builder(token, GatewayIntents::empty())
        .event_handler(handler)
        .await?;

    info!("Starting Discord client");
    client.start().await?;
    Ok(())
}
