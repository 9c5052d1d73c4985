#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod addresses;
pub mod organizations;
pub mod views;
pub mod winners;
