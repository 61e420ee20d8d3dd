//! Configuration loader and schema types.
//!
//! Settings tune how tracks are named and how tags are written. Book-level
//! metadata (author, album, ...) is never read from here; it always comes
//! from the command line.

mod load;
mod schema;

pub use schema::*;
