//! kex - Krist Explorer
//!
//! A terminal-based explorer for the Krist network.

pub mod actions;
pub mod api;
pub mod app;
pub mod columns;
pub mod config;
pub mod metadata;
pub mod search;
pub mod table;
pub mod ui;
pub mod wallets;

// Re-export commonly used types
pub use app::{
    Activation, AddressResult, App, Focus, NameResult, NavLink, Screen, TransactionsResult,
    TxResult,
};
pub use config::Config;
pub use table::{FetchRequest, TransactionsTable};
