//! Arxiv Listener Dashboard
//!
//! A small desktop dashboard for configuring an arXiv listener: which channel
//! to follow, a free-text area of interest, and the email address to notify.
//! Submitting the form captures the three values as a diagnostic record and
//! logs it; sending them to a backend is not implemented yet.

pub mod form;
pub mod gui;

pub use form::{FormField, SettingsForm, SettingsSnapshot};
