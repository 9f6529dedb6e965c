//! Scene model for the glint ray tracer.
//!
//! A scene is an immutable description of one camera, the objects it
//! sees, the materials those objects reference by index, and the point
//! lights that illuminate them. It is constructed once at startup
//! (in code or through the [`crate::config`] loader), validated, and
//! from then on only read — parallel pixel workers share it by
//! reference with no synchronization.

use glint_math::Vec3;
use thiserror::Error;

/// Errors raised while loading or validating a scene.
///
/// Every variant is a load-time failure: a scene that validates
/// cleanly cannot fail mid-frame, so the renderer never re-checks
/// geometry or material indices.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scene document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("object {index}: sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("object {index}: material index {material} is out of range ({count} materials)")]
    MaterialOutOfRange {
        index: usize,
        material: usize,
        count: usize,
    },

    #[error("camera field of view must lie strictly between 0 and pi radians, got {fov}")]
    InvalidFov { fov: f32 },

    #[error("{context} must have non-negative channels, got {color:?}")]
    NegativeColor { context: String, color: Vec3 },

    #[error("material {index}: albedo weights must be non-negative")]
    NegativeAlbedo { index: usize },

    #[error("material {index}: specular exponent must be positive, got {exponent}")]
    InvalidSpecularExponent { index: usize, exponent: f32 },

    #[error("light {index}: intensity must be positive, got {intensity}")]
    InvalidLightIntensity { index: usize, intensity: f32 },
}

/// The scene camera.
///
/// The frame renderer fixes the viewing convention: the camera sits at
/// `position` looking down -z, with `fov` as the vertical field of
/// view in radians. Rays that escape the scene resolve to
/// `background`.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vec3,

    /// Vertical field of view in radians, strictly between 0 and pi
    pub fov: f32,

    /// Color for rays that hit nothing (RGB, each channel >= 0)
    pub background: Vec3,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, fov: f32, background: Vec3) -> Self {
        Self {
            position,
            fov,
            background,
        }
    }
}

/// Weights for the three Phong contributions.
///
/// Not a single reflectance scalar: `diffuse`, `specular`, and
/// `reflect` independently scale the diffuse term, the specular
/// highlight, and the recursive mirror color. Each is >= 0; the three
/// are not required to sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Albedo {
    pub diffuse: f32,
    pub specular: f32,
    pub reflect: f32,
}

impl Albedo {
    /// Create a new weight triple.
    pub const fn new(diffuse: f32, specular: f32, reflect: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflect,
        }
    }
}

/// A Phong material.
///
/// Materials live in the scene's ordered material list and are
/// referenced by index from objects; many objects may share one
/// material. They are plain read-only values, never mutated after
/// load.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    /// Base surface color for the diffuse term (RGB, each channel >= 0)
    pub diffuse_color: Vec3,

    /// Weights for the diffuse/specular/reflective contributions
    pub albedo: Albedo,

    /// Phong highlight exponent (> 0; higher means a tighter highlight)
    pub specular_exponent: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse_color: Vec3, albedo: Albedo, specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            albedo,
            specular_exponent,
        }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    /// Center position in world space
    pub center: Vec3,

    /// Radius in world units (> 0)
    pub radius: f32,

    /// Index into the scene's material list
    pub material: usize,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: usize) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A renderable object: a closed set of shape variants.
///
/// Only spheres exist today, but the intersection engine dispatches on
/// the variant, so future shapes (planes, triangles) are added here
/// without changing the ray-cast call contract.
#[derive(Clone, Copy, Debug)]
pub enum Object {
    Sphere(Sphere),
}

impl Object {
    /// Index of this object's material in the scene material list.
    pub fn material_index(&self) -> usize {
        match self {
            Object::Sphere(sphere) => sphere.material,
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    /// Position in world space
    pub position: Vec3,

    /// Scalar brightness (> 0), applied to both Phong terms
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A complete scene: camera, objects, materials, and lights.
///
/// Object iteration order is part of the rendering contract — when two
/// objects are hit at exactly the same distance, the first one in
/// `objects` wins, so renders are deterministic.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The single scene camera
    pub camera: Camera,

    /// Renderable objects, in deterministic iteration order
    pub objects: Vec<Object>,

    /// Materials, ordered and index-addressed from objects
    pub materials: Vec<Material>,

    /// Point lights
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with the given camera.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            materials: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let index = self.materials.len();
        self.materials.push(material);
        index
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the material referenced by a validated object.
    ///
    /// The index must come from an object of a scene that passed
    /// [`Scene::validate`]; out-of-range references are rejected at
    /// load time, never at render time.
    #[inline]
    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    /// Validate every load-time invariant of the scene.
    ///
    /// Checks degenerate geometry, material references, camera
    /// parameters, color channels, albedo weights, and light
    /// intensities. An empty object list is valid: every ray misses
    /// and the frame is the background color.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.camera.fov > 0.0 && self.camera.fov < std::f32::consts::PI) {
            return Err(ConfigurationError::InvalidFov {
                fov: self.camera.fov,
            });
        }
        check_color("camera background color", self.camera.background)?;

        for (index, material) in self.materials.iter().enumerate() {
            check_color(
                &format!("material {index}: diffuse color"),
                material.diffuse_color,
            )?;
            let albedo = material.albedo;
            if albedo.diffuse < 0.0 || albedo.specular < 0.0 || albedo.reflect < 0.0 {
                return Err(ConfigurationError::NegativeAlbedo { index });
            }
            if !(material.specular_exponent > 0.0) {
                return Err(ConfigurationError::InvalidSpecularExponent {
                    index,
                    exponent: material.specular_exponent,
                });
            }
        }

        for (index, object) in self.objects.iter().enumerate() {
            match object {
                Object::Sphere(sphere) => {
                    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                        return Err(ConfigurationError::InvalidRadius {
                            index,
                            radius: sphere.radius,
                        });
                    }
                    if sphere.material >= self.materials.len() {
                        return Err(ConfigurationError::MaterialOutOfRange {
                            index,
                            material: sphere.material,
                            count: self.materials.len(),
                        });
                    }
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !(light.intensity > 0.0 && light.intensity.is_finite()) {
                return Err(ConfigurationError::InvalidLightIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }
}

fn check_color(context: &str, color: Vec3) -> Result<(), ConfigurationError> {
    if color.min_element() < 0.0 {
        return Err(ConfigurationError::NegativeColor {
            context: context.to_string(),
            color,
        });
    }
    Ok(())
}
