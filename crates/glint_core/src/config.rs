//! Scene-document loading.
//!
//! The non-core loader: reads a JSON scene document, converts it into
//! the domain [`Scene`](crate::Scene), and runs load-time validation
//! so the renderer never has to re-check geometry or indices.
//!
//! Document shape (camelCase keys, objects tagged by `"type"`):
//!
//! ```json
//! {
//!   "camera": {
//!     "position": [0, 0, 0],
//!     "fieldOfView": 1.5707964,
//!     "backgroundColor": [0.2, 0.3, 0.4]
//!   },
//!   "materials": [
//!     { "diffuseColor": [0.4, 0.4, 0.3],
//!       "albedo": [0.6, 0.3, 0.3],
//!       "specularExponent": 50.0 }
//!   ],
//!   "objects": [
//!     { "type": "sphere", "position": [-4.5, 0, -8],
//!       "radius": 2.0, "material": 0 }
//!   ],
//!   "lights": [
//!     { "position": [-20, 20, 20], "intensity": 1.5 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use serde::Deserialize;

use crate::scene::{
    Albedo, Camera, ConfigurationError, Light, Material, Object, Scene, Sphere,
};

/// Raw document structs: serde's view of the JSON, before any
/// validation. Conversion into the domain types happens in
/// [`load_scene_from_str`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScene {
    camera: RawCamera,
    #[serde(default)]
    materials: Vec<RawMaterial>,
    #[serde(default)]
    objects: Vec<RawObject>,
    #[serde(default)]
    lights: Vec<RawLight>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCamera {
    position: [f32; 3],
    field_of_view: f32,
    background_color: [f32; 3],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMaterial {
    diffuse_color: [f32; 3],
    albedo: [f32; 3],
    specular_exponent: f32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawObject {
    Sphere {
        position: [f32; 3],
        radius: f32,
        material: usize,
    },
}

#[derive(Debug, Deserialize)]
struct RawLight {
    position: [f32; 3],
    intensity: f32,
}

/// Load and validate a scene document from a file.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/reference.json")?;
/// println!("Loaded {} objects", scene.objects.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, ConfigurationError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text, name)
}

/// Load and validate a scene document from an in-memory string.
///
/// `name` is only used for logging.
pub fn load_scene_from_str(text: &str, name: &str) -> Result<Scene, ConfigurationError> {
    let raw: RawScene = serde_json::from_str(text)?;

    let camera = Camera::new(
        vec3(raw.camera.position),
        raw.camera.field_of_view,
        vec3(raw.camera.background_color),
    );

    let mut scene = Scene::new(camera);

    for material in raw.materials {
        let [diffuse, specular, reflect] = material.albedo;
        scene.add_material(Material::new(
            vec3(material.diffuse_color),
            Albedo::new(diffuse, specular, reflect),
            material.specular_exponent,
        ));
    }

    for object in raw.objects {
        match object {
            RawObject::Sphere {
                position,
                radius,
                material,
            } => {
                scene.add_object(Object::Sphere(Sphere::new(vec3(position), radius, material)));
            }
        }
    }

    for light in raw.lights {
        scene.add_light(Light::new(vec3(light.position), light.intensity));
    }

    scene.validate()?;

    log::info!(
        "loaded scene '{}': {} objects, {} materials, {} lights",
        name,
        scene.objects.len(),
        scene.materials.len(),
        scene.lights.len()
    );

    Ok(scene)
}

fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}
