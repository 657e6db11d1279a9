pub mod dataset;
pub mod lookup;
pub mod normalize;
pub mod query;
pub mod render;
