pub mod config;
pub mod passphrase;
