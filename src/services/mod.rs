pub mod aggregate;
pub mod catalog;
pub mod geo;
pub mod population;
