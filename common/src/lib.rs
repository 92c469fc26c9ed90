//! Shared types and render-ready derivations for the Brand Studio client.
//!
//! The backend persists several campaign fields (`contents`, `tone_profile`,
//! `metadata`, `tone_results`) as free-form JSON text, and depending on the
//! code path they arrive either as a JSON string or as an already decoded
//! structure. Everything in this crate exists so that views never have to
//! care which one they got:
//!
//! - [`model`]: wire records exchanged with the REST API and the typed
//!   structures derived from them.
//! - [`normalize`]: the blob normalizer and the resolvers built on it. Every
//!   path ends in a typed value and reports failures to an injected sink.
//! - [`metrics`]: pure display computations (durations, relative times,
//!   intensity tiers).
//! - [`view`]: per-record view models composed from the above.
//! - [`requests`]: request payloads and their validation.
//! - [`selection`]: which detail response a panel is still waiting for.

pub mod metrics;
pub mod model;
pub mod normalize;
pub mod requests;
pub mod selection;
pub mod text;
pub mod view;
