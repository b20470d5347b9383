//! Page components.

pub mod snowfall;
