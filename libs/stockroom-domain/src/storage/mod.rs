//! Storage layer contracts

pub mod ports;

pub use ports::ProductRepository;
