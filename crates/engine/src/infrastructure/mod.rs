//! Infrastructure layer - ports and their concrete implementations.

pub mod clock;
pub mod ports;
pub mod sheet_store;
