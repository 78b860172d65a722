//! Core library components.
//!
//! This module contains the reusable logic for password generation, strength
//! scoring, at-rest encryption and configuration handling. Nothing in here
//! prompts or prints.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod generator;
pub mod store;
pub mod strength;
pub mod vault;
