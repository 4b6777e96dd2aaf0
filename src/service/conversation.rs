//! The channel a request came from.
//!
//! A `Conversation` replies to the member who issued a command and can wait for
//! that member's next matching message. Waiting is the bot's only suspension point
//! with a caller-visible timeout: the wait ends with `None` once the timeout elapses
//! and nothing is applied afterwards.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use serenity::{
    all::{
        ChannelId, CommandInteraction, CreateEmbed, CreateInteractionResponse,
        CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
        Message, ShardMessenger, UserId,
    },
    async_trait,
    collector::MessageCollector,
    http::Http,
};

use crate::error::AppError;

/// Predicate over the content of a candidate reply.
pub type ReplyFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[async_trait]
pub trait Conversation: Send + Sync {
    /// Tells the requester the command was received and a reply will follow.
    ///
    /// Must happen before any slow work. Chat messages need no acknowledgement.
    async fn acknowledge(&self) -> Result<(), AppError> {
        Ok(())
    }

    /// Sends a text reply to the requesting member.
    async fn reply(&self, content: &str) -> Result<(), AppError>;

    /// Sends an embed reply to the requesting member.
    async fn reply_embed(&self, embed: CreateEmbed) -> Result<(), AppError>;

    /// Waits for the requesting member's next message in the same channel that
    /// passes `filter`.
    ///
    /// # Returns
    /// - `Some(content)` - First accepted message
    /// - `None` - Nothing accepted before `timeout` elapsed
    async fn await_reply(&self, filter: ReplyFilter, timeout: Duration) -> Option<String>;
}

/// Conversation started by a chat message.
pub struct MessageConversation {
    http: Arc<Http>,
    shard: ShardMessenger,
    message: Message,
}

impl MessageConversation {
    pub fn new(http: Arc<Http>, shard: ShardMessenger, message: Message) -> Self {
        Self {
            http,
            shard,
            message,
        }
    }
}

#[async_trait]
impl Conversation for MessageConversation {
    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.message.reply(&self.http, content).await?;

        Ok(())
    }

    async fn reply_embed(&self, embed: CreateEmbed) -> Result<(), AppError> {
        let message = CreateMessage::new()
            .embed(embed)
            .reference_message(&self.message);
        self.message
            .channel_id
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    async fn await_reply(&self, filter: ReplyFilter, timeout: Duration) -> Option<String> {
        collect_reply(
            &self.shard,
            self.message.channel_id,
            self.message.author.id,
            filter,
            timeout,
        )
        .await
    }
}

/// Conversation started by a context-menu command.
///
/// The first reply answers the interaction; later replies are follow-ups. Once
/// acknowledged, the interaction is deferred and every reply is a follow-up. All
/// replies are ephemeral.
pub struct InteractionConversation {
    http: Arc<Http>,
    shard: ShardMessenger,
    command: CommandInteraction,
    responded: AtomicBool,
}

impl InteractionConversation {
    pub fn new(http: Arc<Http>, shard: ShardMessenger, command: CommandInteraction) -> Self {
        Self {
            http,
            shard,
            command,
            responded: AtomicBool::new(false),
        }
    }

    async fn send(
        &self,
        content: Option<&str>,
        embed: Option<CreateEmbed>,
    ) -> Result<(), AppError> {
        if !self.responded.swap(true, Ordering::SeqCst) {
            let mut message = CreateInteractionResponseMessage::new().ephemeral(true);
            if let Some(content) = content {
                message = message.content(content);
            }
            if let Some(embed) = embed {
                message = message.embed(embed);
            }

            self.command
                .create_response(&self.http, CreateInteractionResponse::Message(message))
                .await?;
        } else {
            let mut followup = CreateInteractionResponseFollowup::new().ephemeral(true);
            if let Some(content) = content {
                followup = followup.content(content);
            }
            if let Some(embed) = embed {
                followup = followup.embed(embed);
            }

            self.command.create_followup(&self.http, followup).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl Conversation for InteractionConversation {
    async fn acknowledge(&self) -> Result<(), AppError> {
        if self.responded.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let defer = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        );
        self.command.create_response(&self.http, defer).await?;

        Ok(())
    }

    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.send(Some(content), None).await
    }

    async fn reply_embed(&self, embed: CreateEmbed) -> Result<(), AppError> {
        self.send(None, Some(embed)).await
    }

    async fn await_reply(&self, filter: ReplyFilter, timeout: Duration) -> Option<String> {
        collect_reply(
            &self.shard,
            self.command.channel_id,
            self.command.user.id,
            filter,
            timeout,
        )
        .await
    }
}

async fn collect_reply(
    shard: &ShardMessenger,
    channel_id: ChannelId,
    author_id: UserId,
    filter: ReplyFilter,
    timeout: Duration,
) -> Option<String> {
    MessageCollector::new(shard)
        .channel_id(channel_id)
        .author_id(author_id)
        .filter(move |message| filter(&message.content))
        .timeout(timeout)
        .next()
        .await
        .map(|message| message.content)
}
