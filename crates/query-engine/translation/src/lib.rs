//! Translate the incoming search query to a request to be run against the
//! query execution service.

pub mod translation;
