//! HTTP handlers

pub mod product;
