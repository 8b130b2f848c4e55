//! Networking: builds the REST client and the use cases bound to it.

pub mod api;
