pub mod checksum;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod manifest;
pub mod store;
pub mod verify;
pub mod voice;
