//! Core types and trait definitions for the RSVP service.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the shape of a submission, the rules it must satisfy before anything is
//! written, and the [`store::RsvpStore`] abstraction that backends implement.

pub mod error;
pub mod rsvp;
pub mod store;
pub mod submission;
pub mod validate;

pub use error::{Error, Result, ValidationError};
