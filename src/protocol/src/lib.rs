pub mod pointer;
pub mod style;
pub mod surface;

pub type V2 = nalgebra::Vector2<f32>;
