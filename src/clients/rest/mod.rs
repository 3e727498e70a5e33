//! The REST client registry.
//!
//! # Overview
//!
//! - [`RestClient`]: owns the transport, registers resource definitions, and
//!   hands out cached [`Resource`](crate::rest::Resource) instances
//! - [`ClientError`]: errors raised by the registry
//!
//! # Lazy Instantiation
//!
//! Registering a resource only stores its factory. The resource is built on
//! the first call to [`RestClient::resource`] and every later call returns
//! the same instance.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::ClientError;
