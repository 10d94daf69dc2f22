pub mod factories;
mod factory;

pub use factory::Factory;
