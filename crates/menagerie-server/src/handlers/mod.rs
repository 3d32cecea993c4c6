//! HTTP handler modules for the menagerie API.
//!
//! Handlers parse the request, take the store lock for as short a time as
//! possible, and map the outcome to a response.

pub mod animals;
pub mod health;
