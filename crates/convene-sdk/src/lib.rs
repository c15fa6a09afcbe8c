//! Entity services over the Convene content store.
//!
//! Each service binds one record type to its partition and adds what the
//! site needs on top of plain CRUD: required-field validation on create,
//! derived queries (published, featured, by category), and the two
//! embedded-array editors (agenda sessions, challenge steps).
//!
//! [`ContentStore`] bundles every service over one shared backend.
//!
//! # Error tiers
//!
//! - Validation failures are returned as [`SdkError`] from `create` and the
//!   `add_*` editors.
//! - Storage failures never surface: reads come back empty and writes
//!   come back `None`/`false`, with the cause logged.

pub mod config;
pub mod content;
pub mod error;
pub mod seed;
pub mod services;
mod validation;

pub use config::{Backend, StoreConfig};
pub use content::{ContentStore, EventOverview, PartitionInfo};
pub use error::{SdkError, SdkResult};
pub use seed::{seed_all, SeedOutcome, SeedReport};
pub use services::{
    AgendaService, ChallengeService, EntityService, EventService, FaqService, MarqueeService,
    PartnerService, PressReleaseService, ResourceService, SpeakerService, TopicService,
};

pub use convene_store::{KeyValueStore, Patch};
pub use convene_types as types;
