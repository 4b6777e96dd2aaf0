use thiserror::Error;

use crate::{
    error::{AppError, GENERIC_FAILURE_MESSAGE},
    model::transition::TransitionKind,
};

/// Rejections and failures of a rank transition request.
///
/// Every variant except `External` is a rule rejection decided before any role is
/// mutated. `External` wraps an infrastructure failure from the Discord API or the
/// promotion date store; it may happen after part of the mutation was applied.
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The actor holds none of the privileged roles.
    #[error("Member {actor_id} is not authorized to {kind}")]
    Unauthorized { kind: TransitionKind, actor_id: u64 },

    /// The rank comparison between actor and target forbids the action.
    #[error("Rank order forbids {kind}: actor index {actor_index}, target index {target_index}")]
    RankOrder {
        kind: TransitionKind,
        actor_index: usize,
        target_index: usize,
    },

    /// There is no ladder rank to move the target to.
    #[error("No rank to {kind} to from ladder index {index}")]
    LadderBoundary { kind: TransitionKind, index: usize },

    /// The destination role is on the ladder but does not exist in the guild.
    ///
    /// Indicates the configured ladder and the live guild are out of sync.
    #[error("Ladder role {role_id} does not exist in the guild")]
    UnresolvedRole { kind: TransitionKind, role_id: u64 },

    /// The actor or the target holds no ladder role at all.
    #[error("Member {user_id} holds no ladder role")]
    MissingRank { user_id: u64 },

    /// No answer to the probation exit prompt arrived in time.
    #[error("Probation exit prompt timed out")]
    Timeout,

    #[error(transparent)]
    External(#[from] AppError),
}

impl TransitionError {
    /// Text shown to the actor when the request is rejected or fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { kind, .. } => match kind {
                TransitionKind::Promote => "🚫 У вас нет прав для повышения игроков. Это могут делать только администраторы, КМД и командиры.".to_string(),
                TransitionKind::Demote => "🚫 У вас нет прав для понижения игроков. Это могут делать только администраторы, КМД и командиры.".to_string(),
                TransitionKind::Ban => "У вас нет прав банить игроков.".to_string(),
            },
            Self::RankOrder { kind, .. } => match kind {
                TransitionKind::Promote => "🪖Вы не можете повысить пользователя, у которого такая же или более высокая роль.".to_string(),
                TransitionKind::Demote => "🛑 Вы не можете понизить пользователя с равной или более высокой ролью.".to_string(),
                TransitionKind::Ban => "Вы не можете забанить этого пользователя. У него слишком высокий ранг.".to_string(),
            },
            Self::LadderBoundary { kind, .. } => match kind {
                TransitionKind::Demote => "🚫 Невозможно понизить ниже текущей роли.".to_string(),
                _ => "Невозможно повысить дальше.".to_string(),
            },
            Self::UnresolvedRole { kind, .. } => match kind {
                TransitionKind::Demote => "🚫 Не удалось найти роль для понижения.".to_string(),
                _ => "Роль для повышения не найдена.".to_string(),
            },
            Self::MissingRank { .. } => {
                "Не удалось определить роли. Обратитесь к администрации.".to_string()
            }
            Self::Timeout => "⏱️ Время ожидания истекло. Команда отменена.".to_string(),
            Self::External(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the error is a rule rejection rather than an infrastructure failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::External(_))
    }
}
