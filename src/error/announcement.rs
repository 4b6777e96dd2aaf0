use thiserror::Error;

use crate::error::AppError;

#[derive(Error, Debug)]
pub enum AnnouncementError {
    /// Only administrators may post announcements.
    #[error("Member {0} may not post announcements")]
    NotAdmin(u64),

    /// The announcement marker was sent without any text.
    #[error("Announcement text is empty")]
    Empty,

    /// Posting to the announcements channel failed.
    #[error(transparent)]
    External(#[from] AppError),
}

impl AnnouncementError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotAdmin(_) => "Вы не можете делать объявления",
            Self::Empty => "Пожалуйста, укажите текст объявления.",
            Self::External(_) => "Произошла ошибка при отправке объявления.",
        }
    }
}
