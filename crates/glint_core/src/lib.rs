//! Glint Core - scene model and scene-document loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Object`, `Material`, `Light`
//! - **Scene loading**: JSON scene documents with load-time validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! // Load and validate a scene document
//! let scene = load_scene("scenes/reference.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod config;
pub mod scene;

// Re-export commonly used types
pub use config::{load_scene, load_scene_from_str};
pub use scene::{Albedo, Camera, ConfigurationError, Light, Material, Object, Scene, Sphere};
