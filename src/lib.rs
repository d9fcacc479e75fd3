pub mod assemble;
pub mod depth_chart;
pub mod fantasy;
pub mod http_client;
pub mod names;
pub mod persist;
pub mod positions;
pub mod reconcile;
pub mod roster_fetch;
pub mod roster_scrape;
pub mod scoring;
pub mod teams;
