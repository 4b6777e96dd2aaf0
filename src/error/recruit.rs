use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecruitError {
    /// The caller does not currently hold the probation role.
    #[error("Member {0} is not on probation")]
    NotOnProbation(u64),

    /// The caller holds the probation role but no start date was ever stored.
    #[error("No probation start date stored for member {0}")]
    MissingStartDate(u64),

    /// The stored start date plus the probation length is not a valid instant.
    #[error("Probation end of member {0} is out of range")]
    PeriodOutOfRange(u64),
}

impl RecruitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotOnProbation(_) => "⛔Эта команда доступна только для игроков с ролью 'Рекрут'.",
            Self::MissingStartDate(_) => {
                "Не удалось найти дату твоего повышения. Обратись к администрации."
            }
            Self::PeriodOutOfRange(_) => crate::error::GENERIC_FAILURE_MESSAGE,
        }
    }
}
