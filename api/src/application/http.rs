pub mod ai;
pub mod health;
pub mod server;
pub mod tracker;
