mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware::from_fn_with_state;
        use dioxus_logger::tracing;

        use crate::server::{
            bot::shard,
            config::Config,
            middleware::https::{redirect_to_https, HttpsRedirect},
            scheduler::web_cache_cleanup,
            startup,
            state::AppState,
            tls,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session_store = startup::connect_to_session_store(&db).await?;
        let cache = startup::connect_to_cache(&config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let discord_http = startup::setup_discord_http(&config);
        let client_id = startup::client_id(&config)?;

        tracing::info!("Starting shards");

        // HTTP is served only once every shard populated the mirror
        let shard_manager = shard::start_shards(&config, cache.clone(), &discord_http).await?;
        tokio::spawn(async move {
            let reason = shard_manager.supervise().await;
            tracing::error!("Shutting down: {}", reason);
            std::process::exit(1);
        });

        let scheduler_db = db.clone();
        let scheduler_store = session_store.clone();
        tokio::spawn(async move {
            if let Err(e) = web_cache_cleanup::start_scheduler(scheduler_db, scheduler_store).await
            {
                tracing::error!("Web cache cleanup scheduler error: {}", e);
            }
        });

        let server_routes = server::router::router(AppState::new(
            db,
            cache,
            http_client,
            oauth_client,
            discord_http,
            client_id,
            config.feed_limit,
        ))?;

        let router = startup::with_request_layers(
            dioxus::server::router(App).merge(server_routes),
            session_store,
            &config,
        );

        tracing::info!(
            "Serving HTTP on {}",
            dioxus_cli_config::fullstack_address_or_localhost()
        );

        let Some(https) = config.https.clone() else {
            return Ok(router);
        };

        let https_port = https.port;
        let https_router = router.clone();
        tokio::spawn(async move {
            if let Err(e) = tls::serve_https(https_router, &https).await {
                tracing::error!("HTTPS listener error: {}", e);
                std::process::exit(1);
            }
        });

        Ok(router.layer(from_fn_with_state(
            HttpsRedirect {
                port: https_port,
                trust_proxy: config.trust_proxy,
            },
            redirect_to_https,
        )))
    })
}
