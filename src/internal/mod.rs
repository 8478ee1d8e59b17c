// Internal shared infrastructure for the optio library

pub mod error;
