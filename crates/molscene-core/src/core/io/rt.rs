use crate::core::io::traits::SceneFile;
use crate::core::models::primitives::{Cylinder, Sphere};
use crate::core::models::scene::{Ambient, Camera, Light, Scene};
use nalgebra::{Point3, Vector3};
use std::io::{self, Write};

/// The miniRT `.rt` scene format.
///
/// A scene is written as the ambient, camera and light records followed by one
/// `sp` record per sphere and one `cy` record per cylinder. Primitive
/// positions and directions use four decimals, radii and lengths two.
pub struct RtFile;

// Preamble values are written in shortest round-trip form, which always
// carries a fractional part (`-50.0`, `0.2`).
fn real(value: f64) -> String {
    format!("{:?}", value)
}

fn point(p: &Point3<f64>) -> String {
    format!("{},{},{}", real(p.x), real(p.y), real(p.z))
}

fn vector(v: &Vector3<f64>) -> String {
    format!("{},{},{}", real(v.x), real(v.y), real(v.z))
}

impl RtFile {
    pub fn ambient_line(ambient: &Ambient) -> String {
        format!("A {} {}", real(ambient.ratio), ambient.color)
    }

    pub fn camera_line(camera: &Camera) -> String {
        format!(
            "C {} {} {}",
            point(&camera.position),
            vector(&camera.orientation),
            camera.fov_degrees
        )
    }

    pub fn light_line(light: &Light) -> String {
        format!(
            "L {} {} {}",
            point(&light.position),
            real(light.brightness),
            light.color
        )
    }

    pub fn sphere_line(sphere: &Sphere) -> String {
        format!(
            "sp {:.4},{:.4},{:.4} {:.2} {}",
            sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius, sphere.color
        )
    }

    pub fn cylinder_line(cylinder: &Cylinder) -> String {
        format!(
            "cy {:.4},{:.4},{:.4} {:.4},{:.4},{:.4} {:.2} {:.2} {}",
            cylinder.center.x,
            cylinder.center.y,
            cylinder.center.z,
            cylinder.axis.x,
            cylinder.axis.y,
            cylinder.axis.z,
            cylinder.radius,
            cylinder.length,
            cylinder.color
        )
    }

    /// All records of `scene` in output order.
    pub fn lines(scene: &Scene) -> Vec<String> {
        let mut lines = Vec::with_capacity(3 + scene.primitive_count());
        lines.push(Self::ambient_line(&scene.ambient));
        lines.push(Self::camera_line(&scene.camera));
        lines.push(Self::light_line(&scene.light));
        lines.extend(scene.spheres.iter().map(Self::sphere_line));
        lines.extend(scene.cylinders.iter().map(Self::cylinder_line));
        lines
    }

    /// Renders the scene as a single string, records separated by newlines.
    pub fn render(scene: &Scene) -> String {
        Self::lines(scene).join("\n")
    }
}

impl SceneFile for RtFile {
    type Error = io::Error;

    fn write_to(scene: &Scene, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in Self::lines(scene) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::color::Rgb;

    #[test]
    fn default_preamble_is_written_verbatim() {
        let scene = Scene::default();
        assert_eq!(
            RtFile::lines(&scene),
            vec![
                "A 0.2 255,255,255",
                "C -50.0,0.0,20.0 0.0,0.0,1.0 70",
                "L -40.0,50.0,0.0 0.6 10,0,255",
            ]
        );
    }

    #[test]
    fn sphere_line_uses_four_and_two_decimals() {
        let sphere = Sphere {
            center: Point3::new(-0.952, 0.6596, -0.6532),
            radius: 1.0,
            color: Rgb::GREY,
        };
        assert_eq!(
            RtFile::sphere_line(&sphere),
            "sp -0.9520,0.6596,-0.6532 1.00 128,128,128"
        );
    }

    #[test]
    fn cylinder_line_uses_four_and_two_decimals() {
        let cylinder = Cylinder {
            center: Point3::new(0.5, 0.0, 0.0),
            axis: Vector3::new(1.0, 0.0, 0.0),
            radius: 0.4,
            length: 1.0,
            color: Rgb::LIGHT_GREY,
        };
        assert_eq!(
            RtFile::cylinder_line(&cylinder),
            "cy 0.5000,0.0000,0.0000 1.0000,0.0000,0.0000 0.40 1.00 200,200,200"
        );
    }

    #[test]
    fn write_to_terminates_every_record_with_newline() {
        let mut scene = Scene::default();
        scene.spheres.push(Sphere {
            center: Point3::new(1.0, 2.0, 3.0),
            radius: 1.0,
            color: Rgb::WHITE,
        });

        let mut buf = Vec::new();
        RtFile::write_to(&scene, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("sp 1.0000,2.0000,3.0000 1.00 255,255,255\n"));
        assert_eq!(text.trim_end(), RtFile::render(&scene));
    }

    #[test]
    fn write_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.rt");

        RtFile::write_to_path(&Scene::default(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("A 0.2 255,255,255\n"));
    }
}
