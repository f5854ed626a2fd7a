pub mod composite;
pub mod layer;
pub mod pipeline;
