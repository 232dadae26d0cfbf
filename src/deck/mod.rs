pub mod coerce;
pub mod reading;
pub mod reset;
pub mod swap;
