pub mod error;
pub mod gateway; // Backend forwarding service module
pub mod models;
pub mod modules;
pub mod utils;
