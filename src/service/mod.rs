pub mod announcement;
pub mod conversation;
pub mod guild;
pub mod onboarding;
pub mod recruit;
pub mod stats;
pub mod transition;

#[cfg(test)]
mod test;
