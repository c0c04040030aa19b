use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        stats::{BotConfigDto, StatsDto},
    },
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping public endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Permissions requested by the invite link: View Channels, Send Messages,
/// Embed Links and Read Message History.
const INVITE_PERMISSIONS: u64 = (1 << 10) | (1 << 11) | (1 << 14) | (1 << 16);

/// Get public bot statistics.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bot statistics", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db, state.cache.as_ref())
        .get_stats()
        .await?;

    Ok(Json(stats))
}

/// Get public bot configuration.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bot configuration", body = BotConfigDto)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(BotConfigDto {
        default_feed_limit: state.feed_limit,
        invite_url: invite_url(state.client_id),
    }))
}

fn invite_url(client_id: u64) -> String {
    format!(
        "https://discord.com/oauth2/authorize?client_id={}&scope=bot&permissions={}",
        client_id, INVITE_PERMISSIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the bot invite link.
    ///
    /// Expected: client ID and permission bits embedded
    #[test]
    fn builds_invite_url() {
        assert_eq!(
            invite_url(1234),
            "https://discord.com/oauth2/authorize?client_id=1234&scope=bot&permissions=84992"
        );
    }
}
