//! UI module - contains UI rendering components
//!
//! Widgets here only draw; page state lives on `App`.

pub mod components;
