use crate::{
    client::model::error::ApiError,
    model::guild::{ChannelDto, GuildDto, GuildProfileDto, UpdateGuildProfileDto},
};

use super::helper::{get, parse_response, patch, send_request, serialize_json};

/// Get a guild with its profile and feed limit
pub async fn get_guild(guild_id: u64) -> Result<GuildDto, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Update the guild's bot settings
pub async fn update_guild(
    guild_id: u64,
    payload: UpdateGuildProfileDto,
) -> Result<GuildProfileDto, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);
    let body = serialize_json(&payload)?;

    let response = send_request(patch(&url).body(body)).await?;
    parse_response(response).await
}

/// Get the channels feeds can be posted to
pub async fn get_channels(guild_id: u64) -> Result<Vec<ChannelDto>, ApiError> {
    let url = format!("/api/guilds/{}/channels", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
