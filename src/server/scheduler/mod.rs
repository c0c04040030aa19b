pub mod web_cache_cleanup;
