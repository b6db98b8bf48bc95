mod bot;
mod commands;
mod menu;

pub use bot::run_bot;
