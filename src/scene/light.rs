pub mod point_light;

pub use point_light::PointLightSource;

use crate::{
    error::Result,
    math::{color::Color, point::Point, vector::Vector},
    scene::object::material::Material,
};

/// Phong reflection model: ambient + diffuse + specular.
///
/// `eye` and `normal` must be unit vectors pointing away from `position`.
/// Diffuse and specular are dropped when the light is behind the surface,
/// specular alone when the reflection points away from the eye.
/// Fails only when the light sits exactly at `position`.
pub fn lighting(
    material: &Material,
    light: &PointLightSource,
    position: Point,
    eye: Vector,
    normal: Vector,
) -> Result<Color> {
    let effective_color = material.color * light.intensity();
    let light_v = (light.position() - position).normalize()?;

    let ambient = effective_color * material.ambient;

    let light_dot_normal = light_v.dot(normal);
    if light_dot_normal < 0. {
        return Ok(ambient);
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_v = (-light_v).reflect(normal);
    let reflect_dot_eye = reflect_v.dot(eye);
    let specular = if reflect_dot_eye <= 0. {
        Color::black()
    } else {
        light.intensity() * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    Ok(ambient + diffuse + specular)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::{assert_approx_eq, error::Error, math::tuple::Tuple};

    fn setup() -> (Material, Point) {
        (Material::default(), Point::zero())
    }

    #[test]
    fn eye_between_light_and_surface() {
        let (material, position) = setup();
        let eye = Vector::new(0., 0., -1.);
        let normal = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::white());

        let color = lighting(&material, &light, position, eye, normal).unwrap();
        assert_approx_eq!(color, Color::new(1.9, 1.9, 1.9));
    }

    #[test]
    fn eye_offset_45_deg() {
        let (material, position) = setup();
        let eye = Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let normal = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::white());

        let color = lighting(&material, &light, position, eye, normal).unwrap();
        assert_approx_eq!(color, Color::new(1., 1., 1.));
    }

    #[test]
    fn light_offset_45_deg() {
        let (material, position) = setup();
        let eye = Vector::new(0., 0., -1.);
        let normal = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 10., -10.), Color::white());

        let expected = 0.1 + 0.9 * FRAC_1_SQRT_2;
        let color = lighting(&material, &light, position, eye, normal).unwrap();
        assert_approx_eq!(color, Color::new(expected, expected, expected));
    }

    #[test]
    fn eye_in_path_of_reflection() {
        let (material, position) = setup();
        let eye = Vector::new(0., -FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
        let normal = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 10., -10.), Color::white());

        let expected = 1. + 0.9 * FRAC_1_SQRT_2;
        let color = lighting(&material, &light, position, eye, normal).unwrap();
        assert_approx_eq!(color, Color::new(expected, expected, expected));
    }

    #[test]
    fn light_behind_surface() {
        let (material, position) = setup();
        let eye = Vector::new(0., 0., -1.);
        let normal = Vector::new(0., 0., -1.);
        let light = PointLightSource::new(Point::new(0., 0., 10.), Color::white());

        let color = lighting(&material, &light, position, eye, normal).unwrap();
        assert_approx_eq!(color, Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn colored_light_and_surface_blend() {
        let material = Material {
            color: Color::new(1., 0.5, 0.),
            ambient: 1.,
            diffuse: 0.,
            specular: 0.,
            ..Default::default()
        };
        let light = PointLightSource::new(Point::new(0., 0., -10.), Color::new(0.5, 1., 1.));
        let eye = Vector::new(0., 0., -1.);

        let color = lighting(&material, &light, Point::zero(), eye, eye).unwrap();
        assert_approx_eq!(color, Color::new(0.5, 0.5, 0.));
    }

    #[test]
    fn light_at_surface_point_fails() {
        let (material, position) = setup();
        let light = PointLightSource::new(position, Color::white());
        let eye = Vector::new(0., 0., -1.);

        assert_eq!(
            lighting(&material, &light, position, eye, eye),
            Err(Error::ZeroMagnitude)
        );
    }
}
