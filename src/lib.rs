pub mod config;
pub mod demo;
pub mod greeter;

pub use greeter::Greeter;
