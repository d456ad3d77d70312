//! Domain types shared by the folio server and client.
//!
//! Holds the project record, its input DTO and validation rules, and the
//! default portfolio entries used to seed an empty store. No I/O lives here.

pub mod defaults;
pub mod error;
pub mod project;
