pub mod audit;
pub mod config;
pub mod corrections;
pub mod normalize;
pub mod table;
