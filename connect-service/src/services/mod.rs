//! Request-independent transformations used by the handlers

pub mod calendar;
pub mod imaging;
