//! Core photo stylization and face tracking library.

pub mod capture;
pub mod filter;
pub mod pipeline;
pub mod shared;
pub mod stylize;
pub mod tracking;
