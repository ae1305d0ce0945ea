pub mod math;
pub use math::{P3, V3};

pub mod camera;
pub mod config;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod manager;
pub mod material;
pub mod object;
pub mod ray;
pub mod renderer;
pub mod rgba;
pub mod scene;
pub mod session;
pub mod shape;

pub use crate::ray::Ray;
pub use crate::renderer::{render, RenderConfig, RenderMode, Renderer};
pub use crate::rgba::RGBA;
pub use crate::shape::Sphere;
