use crate::{
    error::announcement::AnnouncementError,
    model::{guild::GuildConfig, member::GuildMember},
    service::guild::GuildActions,
};

/// Confirmation shown to the administrator after posting.
pub const ANNOUNCEMENT_SENT: &str = "Объявление успешно отправлено!";

pub struct AnnouncementService<'a> {
    guild: &'a dyn GuildActions,
    config: &'a GuildConfig,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(guild: &'a dyn GuildActions, config: &'a GuildConfig) -> Self {
        Self { guild, config }
    }

    /// Posts an administrator's text to the announcements channel.
    ///
    /// # Arguments
    /// - `author` - Member who sent the announcement
    /// - `text` - Announcement text without the marker
    ///
    /// # Returns
    /// - `Ok(())` - Text posted
    /// - `Err(AnnouncementError::NotAdmin)` - Author holds no administrator role
    /// - `Err(AnnouncementError::Empty)` - Nothing to post
    /// - `Err(AnnouncementError::External)` - Posting failed
    pub async fn announce(&self, author: &GuildMember, text: &str) -> Result<(), AnnouncementError> {
        if !author.holds_any(&self.config.admin_roles) {
            return Err(AnnouncementError::NotAdmin(author.user_id));
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(AnnouncementError::Empty);
        }

        self.guild
            .send_channel(self.config.channels.announcements, text)
            .await?;

        tracing::info!("Member {} posted an announcement", author.user_id);

        Ok(())
    }
}
