//! External shapes of the entities.
//!
//! `requests` holds the flat write shapes that reference related rows by
//! id; `responses` holds the nested read shapes.

pub mod requests;
pub mod responses;
