use crate::server::{
    data::feed::FeedRepository,
    model::feed::{CreateFeedParam, UpdateFeedParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod find_in_guild;
mod get_by_guild;
mod update;
