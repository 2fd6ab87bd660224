pub mod config;
pub mod core;
pub mod journal;
pub mod models;
pub mod reporting;
pub mod source;
#[cfg(test)]
pub mod test_helpers;
