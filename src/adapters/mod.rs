//! Adapters layer
//!
//! Translates between the outside world and the application layer. The HTTP
//! adapter exposes the use cases over actix-web.

pub mod http;
