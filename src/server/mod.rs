//! Server-side API backend and bot process manager.
//!
//! This module contains the backend of the feed panel: the REST API used by the
//! control panel, Discord OAuth2 login, and the bot shards that keep a cache
//! mirror of Discord guilds, channels and users. The backend uses Axum as the web
//! framework, SeaORM for database operations, Redis for the cache mirror and
//! Serenity for the Discord gateway.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database repositories and cache mirror accessors
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Sessions, authentication guards, request logging and HTTPS redirects
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache, HTTP clients)
//! - **Startup** (`startup`) - Initialization of database, sessions, cache and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Cache** (`cache/`) - Key-value store behind the Discord mirror
//! - **Scheduler** (`scheduler/`) - Cron job removing expired web cache entries and sessions
//! - **Bot** (`bot/`) - Shard manager and gateway event handlers
//! - **TLS** (`tls`) - HTTPS listener
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and logs the request
//! 3. **Controller** checks access, calls the service
//! 4. **Service** validates input and orchestrates repositories and the mirror
//! 5. **Controller** converts the result to a DTO and responds
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod bot;
pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod tls;
pub mod util;
