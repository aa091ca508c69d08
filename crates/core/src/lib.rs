//! Responder Core - media-query subscriptions with aggregated notifications.
//!
//! A caller registers a mapping from media-query strings to values and
//! receives the subset of values whose queries currently match, first
//! immediately and then every time any of the queries changes.
//!
//! # Core Concepts
//!
//! - `MediaQueryProvider` / `MediaQueryList`: the host facility that reports
//!   match state and change notifications (e.g. `window.matchMedia`)
//! - `QueryMap`: ordered query-to-value mapping
//! - `Subscription`: the query handles, shared listener and callback created
//!   by one registration
//! - `Responder`: registration entry point returning a teardown function
//! - `InstanceRegistry`: identifier-based registration and teardown
//!
//! # Example
//!
//! ```ignore
//! use responder_core::{QueryMap, Responder};
//!
//! let responder = Responder::new();
//! let teardown = responder.register(
//!     &provider,
//!     QueryMap::from([("(min-width: 100px)", "A"), ("(max-width: 50px)", "B")]),
//!     |matching: &[&str]| println!("{:?}", matching), // ["A"] on a wide viewport
//! )?;
//!
//! teardown(); // true
//! teardown(); // false, already destroyed
//! ```

#![no_std]

extern crate alloc;

pub mod config;
mod error;
pub mod notice;
pub mod provider;
mod query_map;
pub mod registry;
pub mod responder;
pub mod subscription;

#[cfg(test)]
mod testing;

pub use config::{DeprecationPolicy, ResponderConfig};
pub use error::{Argument, Error, Result};
pub use notice::{Notice, NoticeSink, NullSink, Target};
pub use provider::{Listener, MediaQueryList, MediaQueryProvider};
pub use query_map::QueryMap;
pub use registry::{InstanceId, InstanceRegistry};
pub use responder::{Responder, Teardown};
pub use subscription::{ChangeCallback, QueryHandle, Subscription};
