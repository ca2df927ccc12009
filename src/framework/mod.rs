//! Generic actor framework for table-like resources.
//!
//! This module provides the building blocks of the in-memory table store:
//! each table is a [`ResourceActor`] owning its rows, reached through a
//! cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that row types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one table
//! - [`ResourceClient`] - Type-safe handle for sending requests
//! - [`FrameworkError`] - Plumbing errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
