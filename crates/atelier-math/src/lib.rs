pub mod aabb;
pub mod angles;
pub mod plane;
pub mod ray;
pub mod reflect;

pub use glam::{DVec2, DVec3};
pub use aabb::Aabb2;
pub use angles::{direction_2d, direction_from_angles, normal_2d, normal_from_angles, polar_offset};
pub use plane::Plane;
pub use ray::Ray;
pub use reflect::Reflect;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
