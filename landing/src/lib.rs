//! # meridian-landing
//!
//! Client-side controller for the Meridian single-page marketing site,
//! built with Leptos 0.8 in CSR mode.
//!
//! The page is a stack of sections of which one is visible at a time, a
//! search overlay with predictive suggestions over a fixed catalog, tilting
//! cards, a contact form and a toast. No network, no persistence.
//!
//! ## Layout
//!
//! - [`config`], [`router`], [`search`], [`tilt`], [`toast`] - plain state
//!   and rules, no DOM access
//! - [`controller`] - the reactive [`SiteController`] shared by all views
//! - [`dom`] - the few imperative document operations
//! - [`sections`] - Leptos components
//!
//! ---
//!
//! Developed by the Meridian Web Team (c)2025

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod logging;
pub mod router;
pub mod search;
pub mod sections;
pub mod tilt;
pub mod toast;

pub use app::App;
pub use config::SiteConfig;
pub use controller::SiteController;
