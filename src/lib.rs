pub mod api;
pub mod config;
pub mod encoders;
pub mod humanize;
pub mod observability;
pub mod records;
pub mod storage;
