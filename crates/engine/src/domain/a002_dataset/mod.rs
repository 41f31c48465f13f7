pub mod generator;
pub mod grouping;
