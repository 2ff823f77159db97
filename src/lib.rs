pub mod api;
pub mod app;
pub mod cli;
pub mod schedule;
pub mod ui;
