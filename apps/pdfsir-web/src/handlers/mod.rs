//! HTTP handlers

pub mod tools;
