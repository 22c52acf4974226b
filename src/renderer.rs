use crate::{
    algebra::Vec3,
    color::Color,
    scene::{Hit, Scene, SpecularTint},
    sphere::Side,
    ray::Ray,
};
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};

/// Diffuse and specular light received from every lamp the point can see.
fn lighting(
    scene: &Scene,
    hit: &Hit,
    n: Vec3,
    r: Vec3,
    kd: Color,
    highlight: Color,
    ns: f32,
) -> Color {
    let mut total = Color::BLACK;

    for light in scene.lights() {
        let l = hit.contact.to(light.position).unit();

        // Shadow ray: the point is lit only if this very sphere is the first
        // thing the light reaches on its way to the contact point.
        let shadow = Ray::between(light.position, hit.contact);
        let visible = scene
            .nearest_hit(&shadow, None)
            .map_or(false, |h| h.object == hit.object);
        if !visible {
            continue;
        }

        let nl = n.dot(l);
        if nl > 0.0 {
            total += kd * nl * light.color;

            // Phong
            let rl = r.dot(l);
            if rl > 0.0 {
                total += highlight * rl.powf(ns) * light.color;
            }
        }
    }

    total
}

/// Colour of the sphere struck at `hit` by `incident`, following at most `depth`
/// mirror reflections.
pub fn shade(scene: &Scene, incident: &Ray, hit: &Hit, depth: u32) -> Color {
    let sphere = &scene.spheres[hit.object];

    let mut n = sphere.normal_at(hit.contact);
    if hit.side == Side::Inside {
        n = n.neg();
    }

    // mirror of -V about N, shared by every highlight and the reflected ray
    let r = incident.direction.neg().mirror(n).unit();

    let (kd, ks) = sphere.pattern.colors(&sphere.material, n);
    let highlight = match scene.lighting.specular {
        SpecularTint::Diffuse => kd,
        SpecularTint::Specular => ks,
    };

    let mut color = lighting(scene, hit, n, r, kd, highlight, sphere.material.ns);

    if depth > 0 {
        let reflected = Ray::new(hit.contact, r);
        color += match scene.nearest_hit(&reflected, Some(hit.object)) {
            Some(next) => shade(scene, &reflected, &next, depth - 1) * ks,
            None => scene.lighting.sky * ks,
        };
    }

    color
}

/// Colour seen along a primary ray.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    match scene.nearest_hit(ray, None) {
        Some(hit) => shade(scene, ray, &hit, depth),
        None => scene.lighting.sky,
    }
}

pub fn render(scene: &Scene, progress: bool) -> RgbImage {
    let settings = scene.render;
    let (width, height) = (settings.width, settings.height);

    let bar = progress.then(|| {
        let pb = ProgressBar::new(height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    });

    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let ray = scene.camera.ray(x, y, width, height);
            let color = trace(scene, &ray, settings.max_depth);
            img.put_pixel(x, y, Rgb(settings.tonemap.to_rgb8(color)));
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }
    img
}
