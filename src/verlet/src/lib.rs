pub mod cloth;
pub mod config;
pub mod constraint;
pub mod error;
pub mod frame;
pub mod point;

pub use cloth::Cloth;
pub use config::{ClothConfig, PhysicsConfig, PointerConfig};
pub use constraint::Constraint;
pub use error::ConfigError;
pub use frame::FrameClock;
pub use point::Point;

pub type V2 = nalgebra::Vector2<f32>;
