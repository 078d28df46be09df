//! Infrastructure - ports and the adapters behind them.

pub mod clock;
pub mod config;
pub mod correlation;
pub mod ports;
pub mod sqlite;
