//! Glint Renderer - recursive Whitted-style ray tracing.
//!
//! The rendering pipeline, leaf-first:
//!
//! - **Intersection**: ray-sphere tests and the nearest-hit scene
//!   query ([`intersect`])
//! - **Shading**: Phong diffuse + specular with hard shadows
//!   ([`shade`])
//! - **Tracing**: the recursive driver combining local shading with
//!   depth-limited mirror reflections ([`tracer`])
//! - **Frame output**: primary-ray generation, tone mapping, and the
//!   RGBA framebuffer ([`renderer`], [`framebuffer`])
//!
//! Rendering is a pure function of an immutable scene plus the target
//! dimensions; rows are traced in parallel with rayon.

pub mod framebuffer;
pub mod intersect;
pub mod renderer;
pub mod shade;
pub mod tracer;

// Re-export the public surface
pub use framebuffer::Framebuffer;
pub use intersect::{offset_origin, scene_intersect, Collision, Intersectable, RAY_BIAS};
pub use renderer::{color_to_rgba, primary_ray, render, tone_map};
pub use shade::shade;
pub use tracer::{cast_ray, MAX_DEPTH};
