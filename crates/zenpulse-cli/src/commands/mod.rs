pub mod affirm;
pub mod catalog;
pub mod config;
pub mod plans;
pub mod session;
