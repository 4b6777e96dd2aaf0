//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

use super::member::TEST_GUILD_ID;

/// Creates a test Serenity Role belonging to `TEST_GUILD_ID`.
///
/// The role is not hoisted, not managed, not mentionable and has no permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name, e.g. a rank such as "Рекрут"
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Discord's own role position (unrelated to the bot's ladder)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
