//! Provider-facing contracts

pub mod ports;
