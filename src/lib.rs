//! SPECTRA CLI
//!
//! spectra-common のコントローラーをターミナルから操作する

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod terminal;
pub mod transport;
