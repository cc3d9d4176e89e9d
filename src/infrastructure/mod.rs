pub mod news_api;
pub mod repositories;
pub mod seed;
