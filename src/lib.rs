//! Core calculation logic kept in a library so the CLI and the GUI share one engine.

pub mod app;
pub mod calculator;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod contact;
pub mod fuels;
pub mod i18n;
pub mod ui_cli;
