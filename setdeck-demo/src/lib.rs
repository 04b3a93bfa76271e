//! # setdeck-demo
//!
//! Demo application for the `setdeck` settings library.
//!
//! Registers a general application schema, a standalone notifications
//! schema, two collapsible schema groups and two plugin categories, then
//! serves a homepage and the settings interface.
//!
//! ## Modules
//!
//! - [`catalog`] - Demo schemas and schema groups
//! - [`plugins`] - Demo export and processing plugins
//! - [`startup`] - Registration sequence and console summary
//! - [`home`] - Homepage with live registry counts
//! - [`server`] - HTTP listener and browser launch

pub mod catalog;
pub mod home;
pub mod plugins;
pub mod server;
pub mod startup;
