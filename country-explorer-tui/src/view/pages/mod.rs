//! Page views

pub mod countries;
