//! Catalog data-access library for flixdeck.
//!
//! Provides a raw TMDB API client and the catalog layer that
//! normalizes upstream records into display models with a
//! deterministic fallback policy.

/// Catalog layer: display model, normalization rules, fallback policy.
pub mod catalog;

/// TMDB API client.
pub mod tmdb;
