pub mod dataset;
pub mod offer;
