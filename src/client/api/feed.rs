use crate::{
    client::model::error::ApiError,
    model::feed::{CreateFeedDto, FeedDto, UpdateFeedDto},
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, patch, post, send_request, serialize_json,
};

/// Get all feeds of a guild
pub async fn get_feeds(guild_id: u64) -> Result<Vec<FeedDto>, ApiError> {
    let url = format!("/api/guilds/{}/feeds", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Create a new feed
pub async fn create_feed(guild_id: u64, payload: CreateFeedDto) -> Result<FeedDto, ApiError> {
    let url = format!("/api/guilds/{}/feeds", guild_id);
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Update a feed
pub async fn update_feed(
    guild_id: u64,
    feed_id: i32,
    payload: UpdateFeedDto,
) -> Result<FeedDto, ApiError> {
    let url = format!("/api/guilds/{}/feeds/{}", guild_id, feed_id);
    let body = serialize_json(&payload)?;

    let response = send_request(patch(&url).body(body)).await?;
    parse_response(response).await
}

/// Delete a feed
pub async fn delete_feed(guild_id: u64, feed_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/guilds/{}/feeds/{}", guild_id, feed_id);

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
