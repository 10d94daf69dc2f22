pub mod client;
pub mod crawler;
pub mod decoder;
pub mod logging;
pub mod shared;
pub mod sink;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
