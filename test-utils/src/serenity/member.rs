//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

use super::user::user_json;

/// Guild id assigned to every test member.
pub const TEST_GUILD_ID: u64 = 100000000000000001;

/// Creates a test Serenity guild Member.
///
/// Creates a Member object by deserializing JSON with the provided values. The
/// member belongs to `TEST_GUILD_ID` and has default flags.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username, used as display name when `nick` is `None`
/// - `nick` - Optional guild nickname
/// - `roles` - Role ids held by the member
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(42, "player", Some("Ник"), &[1, 2]);
/// assert_eq!(member.display_name(), "Ник");
/// assert_eq!(member.roles.len(), 2);
/// ```
pub fn create_test_member(user_id: u64, username: &str, nick: Option<&str>, roles: &[u64]) -> Member {
    let roles: Vec<String> = roles.iter().map(|role| role.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, username),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "guild_id": TEST_GUILD_ID.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
