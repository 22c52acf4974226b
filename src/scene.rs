use crate::{
    algebra::{point3_from_array, Point3},
    camera::{Camera, CameraJson},
    color::{color_from_array, Color},
    constants::{IMAGE_HEIGHT, IMAGE_WIDTH, MAX_REFLECTIONS, SKY},
    error::{Error, Result},
    light::Light,
    material::Material,
    pattern::{Pattern, PatternJson},
    ray::Ray,
    sphere::{Side, Sphere},
    tonemap::Tonemap,
};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Colour multiplying the Phong highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecularTint {
    /// Highlight tinted by the diffuse colour (default).
    #[default]
    Diffuse,
    /// Highlight tinted by the reflected colour.
    Specular,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Colour seen by rays that leave the scene.
    #[serde(deserialize_with = "color_from_array")]
    pub sky: Color,
    pub specular: SpecularTint,
}

impl Default for Lighting {
    fn default() -> Self {
        Lighting { sky: SKY, specular: SpecularTint::default() }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Reflection depth budget of every primary ray.
    pub max_depth: u32,
    pub tonemap: Tonemap,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            max_depth: MAX_REFLECTIONS,
            tonemap: Tonemap::default(),
        }
    }
}

/// Resolved nearest intersection of a ray with the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index of the sphere in [`Scene::spheres`].
    pub object: usize,
    pub distance: f32,
    pub contact: Point3,
    pub side: Side,
}

pub struct Scene {
    pub camera: Camera,
    pub render: RenderSettings,
    pub lighting: Lighting,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Scene {
            camera: Camera::default(),
            render: RenderSettings::default(),
            lighting: Lighting::default(),
            spheres,
            lights,
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Exhaustive scan for the nearest sphere hit by `ray`, skipping `exclude`.
    /// On equal distances the sphere listed first wins.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<usize>) -> Option<Hit> {
        self.spheres
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .filter_map(|(i, s)| s.intersect(ray).map(|x| (i, x)))
            .min_by(|a, b| a.1.distance.total_cmp(&b.1.distance))
            .map(|(object, x)| Hit {
                object,
                distance: x.distance,
                contact: ray.at(x.distance),
                side: x.side,
            })
    }

    pub fn log_summary(&self) {
        let c = &self.camera;
        debug!("=== CAMERA ===");
        debug!(" position : {:?}", c.position);
        debug!(" forward  : {:?}", c.forward);
        debug!(" up       : {:?}", c.up);
        debug!(" fov (°)  : {:.2}", c.fov);
        debug!("=== RENDER === {:?}", self.render);
        debug!("=== LIGHTING === {:?}", self.lighting);

        debug!("=== OBJECTS ({}) ===", self.spheres.len());
        for (i, s) in self.spheres.iter().enumerate() {
            debug!(" [{}] Sphere '{}' {{ center: {:?}, radius: {:.4}, kd: {:?}, ks: {:?}, ns: {}, pattern: {:?} }}",
                   i, s.name, s.center, s.radius, s.material.kd, s.material.ks, s.material.ns, s.pattern);
        }

        debug!("=== LIGHTS ({}) ===", self.lights.len());
        for (i, l) in self.lights.iter().enumerate() {
            debug!(" [{}] Light {{ pos: {:?}, color: {:?} }}", i, l.position, l.color);
        }
    }
}

#[derive(Deserialize)]
struct MaterialJson {
    #[serde(deserialize_with = "color_from_array")]
    kd: Color,
    #[serde(default, deserialize_with = "color_from_array")]
    ks: Color,
    #[serde(default)]
    ns: f32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectJson {
    Sphere { sphere: SphereDesc },
}

#[derive(Deserialize)]
struct SphereDesc {
    #[serde(default)]
    name: String,
    #[serde(deserialize_with = "point3_from_array")]
    center: Point3,
    radius: f32,
    mat: String,
    #[serde(default)]
    pattern: Option<PatternJson>,
}

#[derive(Deserialize)]
struct LightJson {
    #[serde(deserialize_with = "point3_from_array")]
    pos: Point3,
    #[serde(default = "white", deserialize_with = "color_from_array")]
    color: Color,
}

fn white() -> Color { Color::WHITE }

#[derive(Deserialize)]
struct SceneFile {
    #[serde(default)]
    camera: CameraJson,
    #[serde(default)]
    render: RenderSettings,
    #[serde(default)]
    lighting: Lighting,
    #[serde(default)]
    materials: HashMap<String, MaterialJson>,
    objects: Vec<ObjectJson>,
    #[serde(default)]
    lights: Vec<LightJson>,
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| Error::ReadScene {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&data)
}

pub fn from_json(data: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(data)?;

    // 1. Library of materials, by name
    let materials: HashMap<String, Material> = file
        .materials
        .into_iter()
        .map(|(name, m)| {
            if !(m.ns >= 0.0) {
                return Err(Error::InvalidMaterial { name, ns: m.ns });
            }
            Ok((name, Material::new(m.kd, m.ks, m.ns)))
        })
        .collect::<Result<_>>()?;

    // 2. Spheres, with their material looked up by name
    let mut spheres = Vec::with_capacity(file.objects.len());
    for o in file.objects {
        match o {
            ObjectJson::Sphere { sphere } => {
                if !(sphere.radius > 0.0) {
                    return Err(Error::InvalidRadius { name: sphere.name, radius: sphere.radius });
                }
                let material = match materials.get(&sphere.mat) {
                    Some(m) => *m,
                    None => {
                        warn!("sphere '{}': unknown material '{}', using the default", sphere.name, sphere.mat);
                        Material::default()
                    }
                };
                let pattern = sphere.pattern.map(Pattern::from).unwrap_or_default();
                if !pattern.is_valid() {
                    return Err(Error::InvalidPattern { name: sphere.name, pattern });
                }
                spheres.push(
                    Sphere::new(sphere.center, sphere.radius, material)
                        .with_pattern(pattern)
                        .named(sphere.name),
                );
            }
        }
    }

    let lights = file
        .lights
        .iter()
        .map(|l| Light::new(l.pos, l.color))
        .collect();

    Ok(Scene {
        camera: file.camera.into(),
        render: file.render,
        lighting: file.lighting,
        spheres,
        lights,
    })
}
