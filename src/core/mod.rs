//! Core types shared by the node: client, configuration, errors and models

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
