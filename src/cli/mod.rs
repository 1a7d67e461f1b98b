//! Command-line host for the DeepL node

pub mod commands;
