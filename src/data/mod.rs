pub mod chart;
pub mod input;
pub mod location;
pub mod media;
pub mod sample;
pub mod scene;
pub mod store;
