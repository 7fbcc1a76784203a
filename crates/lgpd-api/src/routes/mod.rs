//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled in [`crate::app`].

pub mod diagnosis;
pub mod questionnaire;
pub mod template;
