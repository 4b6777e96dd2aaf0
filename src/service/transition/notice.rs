//! Texts posted to the audit log, the public feed and members' direct messages.

use crate::model::member::mention;

/// Reason recorded on bans issued from the context menu.
pub const BAN_REASON: &str = "Нарушение правил";

/// Reason recorded when a recruit is removed from the guild.
pub const REMOVAL_REASON: &str = "Открываю двери...";

/// Direct message sent to a recruit right before removal.
pub const REMOVAL_DIRECT_MESSAGE: &str = "Вас исключили из сервера.";

/// Prompt offering the two ways out of probation.
pub const PROBATION_EXIT_PROMPT: &str = "Вы пытаетесь понизить игрока до уровня 'Гость'. Выберите одну из следующих опций:\n\
1. Сделать пользователя гостем\n\
2. Исключить пользователя из сервера\n\
Ответьте 1 или 2 в течение 30 секунд, иначе команда будет отменена.";

pub fn promoted_audit(actor_id: u64, target_id: u64, role_name: &str) -> String {
    format!(
        "{} повысил {} до роли {}",
        mention(actor_id),
        mention(target_id),
        role_name
    )
}

pub fn promoted_public(target_id: u64, role_name: &str) -> String {
    format!(
        "# :saluting_face: {} повышен до роли {}",
        mention(target_id),
        role_name
    )
}

pub fn recruit_welcome_public(target_id: u64) -> String {
    format!("{} теперь с нами! Идём в бой!", mention(target_id))
}

/// Onboarding direct message for a member entering probation.
pub fn recruit_onboarding(target_id: u64, probation_days: i64, command_prefix: &str) -> String {
    format!(
        "# 👋Игрок {target} теперь в рекрутах. Добро пожаловать!\n\n\
         В течение {days} дней у вас будет держаться роль рекрута, после чего командиры решат повышать вас или продлить рекрута.\n\n\
         Вам доступна команда {prefix}рекрут (пропиши в чате), чтобы узнать, сколько у вас осталось до получения роли Стрелок или другого вердикта командования.\n\n\
         Выполняйте команды, штурмуйте и не нарушайте правила. ☝🏼За каждым нарушением следует наказание!\n\n\
         По окончании срока рекрута - либо повышение до Стрелка, либо понижение до Гостя или исключение из сервера (при грубых нарушениях). \
         Командиры оценят вашу дисциплину, поведение и активность.\n\n\
         В случае получения 3-х замечаний вы автоматически покидаете рекрутов, несмотря на оставшийся срок.\n\n\
         Убедитесь в том, что:\n\
         - Вы поменяли ник на сервере на ник в Steam.\n\
         - Вы ознакомились с каждым правилом клана.\n\
         - Вы соответствуете по возрасту.\n\n\
         Удачи в бою!",
        target = mention(target_id),
        days = probation_days,
        prefix = command_prefix,
    )
}

pub fn demoted_audit(actor_id: u64, target_id: u64, role_name: &str) -> String {
    format!(
        "{} понизил {} до роли {}.",
        mention(actor_id),
        mention(target_id),
        role_name
    )
}

pub fn demoted_public(target_id: u64, role_name: &str) -> String {
    format!(
        "# :arrow_down: {} понижен до роли {}.",
        mention(target_id),
        role_name
    )
}

pub fn guest_audit(actor_id: u64, target_id: u64) -> String {
    format!("{} понизил {} до гостя.", mention(actor_id), mention(target_id))
}

pub fn removed_public(target_id: u64) -> String {
    format!("# :no_entry: {} больше не с нами.", mention(target_id))
}

pub fn banned_audit(actor_id: u64, target_id: u64) -> String {
    format!("{} забанил игрока {}", mention(actor_id), mention(target_id))
}

pub fn banned_public(target_id: u64) -> String {
    format!(
        "# :x: Игрок {} выгнан из клана за нарушение правил.",
        mention(target_id)
    )
}

pub fn unauthorized_ban_audit(actor_id: u64, target_id: u64) -> String {
    format!("{} пытался забанить {}", mention(actor_id), mention(target_id))
}
