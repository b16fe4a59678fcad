//! Purchase Relay - purchase webhook to chat notification relay
//!
//! Receives purchase events from subscription providers (RevenueCat, RuStore),
//! turns the actionable ones into a short localized message and posts it to
//! a Telegram chat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
