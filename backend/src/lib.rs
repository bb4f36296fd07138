//! Course catalogue and enrollment backend.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the entity model,
//! services and port traits; [`outbound`] implements the ports in memory;
//! [`inbound`] exposes them over HTTP; [`catalogue_seed`] populates the
//! catalogue at startup.

pub mod catalogue_seed;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
