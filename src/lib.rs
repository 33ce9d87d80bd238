//! Health Dashboard - Presentation-State Engine
//!
//! This crate implements the state-and-validation contract behind a
//! health/fitness dashboard: which view is visible, how registration input
//! is validated before acceptance, and how transient UI state evolves in
//! response to discrete user events. Rendering, routing, and data fetching
//! stay behind collaborator traits in `ports`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
