//! glitch-sync
//!
//! GitHub Actions のステップとして、現在のリポジトリを Glitch プロジェクトにインポートする。

pub mod actions;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod glitch;
pub mod runner;
pub mod token;
