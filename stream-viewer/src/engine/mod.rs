pub mod camera;
pub mod core;
pub mod point_cloud;
pub mod systems;
