//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while validation and API handling live in dedicated areas.

pub mod auth;
