use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    /// A SteamID must be exactly 17 ASCII digits.
    #[error("Invalid SteamID '{0}'")]
    InvalidSteamId(String),

    /// The stats API answered, but not with the expected payload.
    ///
    /// Covers a non-"ok" status field or missing sections the display relies on.
    #[error("Unexpected stats payload: {0}")]
    UnexpectedPayload(String),
}
