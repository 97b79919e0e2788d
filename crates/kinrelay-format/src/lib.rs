//! kinrelay formatting pipeline
//!
//! Turns a kintone record into the body of a Chatwork notification:
//! - [`render`] converts one field value to display text
//! - [`extract`] produces the ordered, deduplicated line list
//! - [`Organizer`] abstracts over body-producing strategies
//! - [`compose`] assembles the final message around a body

pub mod compose;
pub mod extract;
pub mod labels;
pub mod organize;
pub mod render;

pub use compose::compose;
pub use extract::{extract, RenderedLine};
pub use organize::{DeterministicOrganizer, Organizer};
pub use render::{digits_only, render};
