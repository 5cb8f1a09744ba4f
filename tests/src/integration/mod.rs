//! Integration tests exercising the gateway router end to end.

pub mod http_api;
