//! Request and response bodies

pub mod product;
