use crate::{
    error::AppError,
    model::{guild::GuildConfig, member::mention},
    service::guild::GuildActions,
};

pub struct OnboardingService<'a> {
    guild: &'a dyn GuildActions,
    config: &'a GuildConfig,
}

impl<'a> OnboardingService<'a> {
    pub fn new(guild: &'a dyn GuildActions, config: &'a GuildConfig) -> Self {
        Self { guild, config }
    }

    /// Gives a newcomer the guest role and records the result in the audit log.
    ///
    /// # Arguments
    /// - `user_id` - Member who just joined
    ///
    /// # Returns
    /// - `Ok(())` - Guest role added
    /// - `Err(AppError)` - Role missing or Discord API failure; a failure audit entry
    ///   has been posted
    pub async fn welcome(&self, user_id: u64) -> Result<(), AppError> {
        let result = self.grant_guest_role(user_id).await;

        let entry = match &result {
            Ok(()) => format!(
                "✅ Роль \"гость\" выдана новоприбывшему: {}",
                mention(user_id)
            ),
            Err(e) => format!(
                "❌ Ошибка при выдаче роли игроку {}: {}",
                mention(user_id),
                e
            ),
        };

        if let Err(e) = self
            .guild
            .send_channel(self.config.channels.audit_log, &entry)
            .await
        {
            tracing::error!("Failed to post onboarding audit entry: {}", e);
        }

        result
    }

    async fn grant_guest_role(&self, user_id: u64) -> Result<(), AppError> {
        let guest_role = self.config.guest_role;

        if self.guild.role_name(guest_role).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Guest role {} does not exist in the guild",
                guest_role
            )));
        }

        self.guild.add_role(user_id, guest_role).await?;

        tracing::info!("Gave guest role to new member {}", user_id);

        Ok(())
    }
}
