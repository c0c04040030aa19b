mod feed;
mod general_stats;
mod guild_profile;
