//! Solutions to the string and linked list puzzles from Cracking the Coding Interview, chapters
//! one and two.
//!
//! Where the book offers a choice between extra memory and extra time, both solutions are here.
//! The buffered versions count with the crate's own [hash tables](crate::collections::hash).

mod error;
mod lists;
mod strings;

pub use error::*;
pub use lists::*;
pub use strings::*;
