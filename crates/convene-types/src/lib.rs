//! Content model for the Convene event-site content store.
//!
//! This crate provides the entity types persisted by the store, the
//! [`Record`] trait that binds each entity to its partition, and the small
//! input primitives shared by every service: HTML sanitization, ID
//! generation, and date/URL validation.
//!
//! # Entities
//!
//! - [`Event`]: a named conference; every other entity points at one
//! - [`Speaker`], [`AgendaDay`] (with embedded [`Session`]s), [`Topic`]
//! - [`Partner`], [`Resource`], [`Faq`]
//! - [`Challenge`] (with embedded [`Step`]s), [`MarqueeItem`]
//! - [`PressRelease`]
//!
//! Relationships (`event_id`, `speaker_id`) are plain strings. Nothing in
//! the store enforces them.

pub mod agenda;
pub mod catalog;
pub mod engagement;
pub mod error;
pub mod event;
pub mod id;
pub mod press;
pub mod record;
pub mod sanitize;
pub mod speaker;
pub mod validate;

pub use agenda::{AgendaDay, Session, SessionType};
pub use catalog::{Faq, Partner, PartnerCategory, Resource, ResourceType, Topic};
pub use engagement::{Challenge, MarqueeItem, Step};
pub use error::TypeError;
pub use event::Event;
pub use id::generate_id;
pub use press::PressRelease;
pub use record::Record;
pub use sanitize::{sanitize, sanitize_top_level};
pub use speaker::{SocialLinks, Speaker};
pub use validate::{is_valid_date, is_valid_url, parse_date};
