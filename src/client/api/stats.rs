use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::stats::{BotConfigDto, StatsDto},
};

pub async fn get_stats() -> Result<StatsDto, ApiError> {
    let response = send_request(get("/api/stats")).await?;
    parse_response(response).await
}

pub async fn get_config() -> Result<BotConfigDto, ApiError> {
    let response = send_request(get("/api/config")).await?;
    parse_response(response).await
}
