//! Lambda handlers, one per binary

pub mod dependency;
pub mod simple;
