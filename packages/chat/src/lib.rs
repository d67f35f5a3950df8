//! Room state machine for Agora.
//!
//! Membership and moderation rules, an append-only message log and a small
//! user profile, layered as domain / usecase / infrastructure. Every successful
//! mutation yields a [`DomainEvent`](domain::DomainEvent) that is published to
//! external observers.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod service;
pub mod usecase;

// Re-export entry points
pub use config::ChatConfig;
pub use service::ChatService;
