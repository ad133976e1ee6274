//! Identifier newtypes shared by the checkout and registration crates.

pub mod types;

pub use types::{CourseCode, OrderId, StudentId, TimeSlot};
