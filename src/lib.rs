//! Estimates how long a donated dish stays safe to eat.
//!
//! A free-text food name is normalized to a category, the category's
//! baseline shelf-life is adjusted for storage and ambient temperature, and
//! an optional pre-trained model may override the rule-based estimate.

pub mod app;
pub mod config;
pub mod expiry;
pub mod model;
pub mod state;
