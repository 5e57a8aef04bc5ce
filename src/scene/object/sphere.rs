use crate::{
    error::Result,
    math::{matrix::Matrix4, point::Point, vector::Vector},
    render::ray::Ray,
};

use super::material::Material;

/// Unit sphere centered at `position` in object space, placed in the world
/// by `transformation`. The inverse is kept next to it, so a sphere with a
/// singular transformation can't be built.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    position: Point,
    transformation: Matrix4,
    transformation_inverse: Matrix4,
    material: Material,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            position: Point::zero(),
            transformation: Matrix4::IDENTITY,
            transformation_inverse: Matrix4::IDENTITY,
            material: Material::default(),
        }
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transformation(transformation: Matrix4) -> Result<Self> {
        let mut sphere = Self::default();
        sphere.set_transformation(transformation)?;
        Ok(sphere)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn transformation(&self) -> &Matrix4 {
        &self.transformation
    }

    pub fn transformation_inverse(&self) -> &Matrix4 {
        &self.transformation_inverse
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    /// Leaves the sphere untouched when `transformation` isn't invertible.
    pub fn set_transformation(&mut self, transformation: Matrix4) -> Result<()> {
        self.transformation_inverse = transformation.inverse()?;
        self.transformation = transformation;
        Ok(())
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Times at which a ray already in object space crosses the sphere,
    /// smaller first. Solves `|origin + t * direction - position|^2 = 1`.
    pub fn local_intersect(&self, object_ray: &Ray) -> Option<[f64; 2]> {
        let sphere_to_ray = *object_ray.origin() - self.position;
        let direction = *object_ray.direction();

        let a = direction.dot(direction);
        let b = 2. * direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. || a == 0. {
            return None;
        }

        let delta_sqrt = discriminant.sqrt();
        let t1 = (-b - delta_sqrt) / (2. * a);
        let t2 = (-b + delta_sqrt) / (2. * a);
        Some([t1.min(t2), t1.max(t2)])
    }

    pub fn local_normal_at(&self, object_point: Point) -> Vector {
        object_point - self.position
    }

    /// Surface normal at a point given in world space, unit length.
    pub fn normal_at(&self, world_point: Point) -> Result<Vector> {
        let object_point = self.transformation_inverse * world_point;
        let object_normal = self.local_normal_at(object_point);
        let world_normal = self.transformation_inverse.transpose() * object_normal;
        world_normal.normalize()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use super::*;
    use crate::{
        assert_approx_eq,
        error::Error,
        math::{color::Color, transform::Transform, tuple::Tuple},
    };

    #[test]
    fn default_sphere() {
        let sphere = Sphere::new();

        assert_approx_eq!(sphere.position(), Point::zero());
        assert_eq!(*sphere.transformation(), Matrix4::IDENTITY);
        assert_eq!(*sphere.material(), Material::default());
    }

    #[test]
    fn change_transformation() {
        let t = Matrix4::translation(2., 3., 4.);
        let mut sphere = Sphere::new();
        sphere.set_transformation(t).unwrap();

        assert_eq!(*sphere.transformation(), t);
        assert_eq!(
            *sphere.transformation_inverse(),
            Matrix4::translation(-2., -3., -4.)
        );
    }

    #[test]
    fn singular_transformation_is_rejected() {
        let mut sphere = Sphere::with_transformation(Matrix4::scaling_uniform(2.)).unwrap();

        assert_eq!(
            sphere.set_transformation(Matrix4::scaling(1., 0., 1.)),
            Err(Error::NonInvertibleMatrix)
        );
        assert_eq!(*sphere.transformation(), Matrix4::scaling_uniform(2.));
        assert!(Sphere::with_transformation(Matrix4::scaling(0., 0., 0.)).is_err());
    }

    #[test]
    fn assign_material() {
        let mut sphere = Sphere::new();
        let material = Material {
            ambient: 1.,
            ..Default::default()
        };
        sphere.set_material(material);
        assert_eq!(*sphere.material(), material);

        sphere.material_mut().color = Color::red();
        assert_eq!(sphere.material().color, Color::red());
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Sphere::new(), Sphere::new());
        assert_ne!(
            Sphere::new(),
            Sphere::new().with_material(Material::with_color(Color::red()))
        );
        assert_ne!(
            Sphere::new(),
            Sphere::with_transformation(Matrix4::translation(1., 0., 0.)).unwrap()
        );
        assert_ne!(
            Sphere::new(),
            Sphere::new().with_position(Point::new(0., 1., 0.))
        );
    }

    #[test]
    fn local_intersect_through_center() {
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        assert_eq!(Sphere::new().local_intersect(&ray), Some([4., 6.]));
    }

    #[test]
    fn local_intersect_off_origin() {
        let sphere = Sphere::new().with_position(Point::new(0., 0., 2.));
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));
        assert_eq!(sphere.local_intersect(&ray), Some([6., 8.]));
    }

    #[test]
    fn local_intersect_with_zero_direction() {
        let ray = Ray::new(Point::zero(), Vector::zero());
        assert_eq!(Sphere::new().local_intersect(&ray), None);
    }

    #[test]
    fn normal_on_axes() {
        let sphere = Sphere::new();

        assert_eq!(
            sphere.normal_at(Point::new(1., 0., 0.)),
            Ok(Vector::new(1., 0., 0.))
        );
        assert_eq!(
            sphere.normal_at(Point::new(0., 1., 0.)),
            Ok(Vector::new(0., 1., 0.))
        );
        assert_eq!(
            sphere.normal_at(Point::new(0., 0., 1.)),
            Ok(Vector::new(0., 0., 1.))
        );
    }

    #[test]
    fn normal_at_nonaxial_point_is_normalized() {
        let sphere = Sphere::new();
        let frac_1_sqrt_3 = 1. / 3_f64.sqrt();
        let normal = sphere
            .normal_at(Point::new(frac_1_sqrt_3, frac_1_sqrt_3, frac_1_sqrt_3))
            .unwrap();

        assert_approx_eq!(
            normal,
            Vector::new(frac_1_sqrt_3, frac_1_sqrt_3, frac_1_sqrt_3)
        );
        assert_approx_eq!(normal, normal.normalize().unwrap());
    }

    #[test]
    fn normal_on_translated_sphere() {
        let sphere = Sphere::with_transformation(Matrix4::translation(0., 1., 0.)).unwrap();
        let normal = sphere
            .normal_at(Point::new(0., 1. + FRAC_1_SQRT_2, -FRAC_1_SQRT_2))
            .unwrap();

        assert_approx_eq!(normal, Vector::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2));
    }

    #[test]
    fn normal_on_transformed_sphere() {
        let transformation = Matrix4::rotation_z(PI / 5.).scale(1., 0.5, 1.).transformed();
        let sphere = Sphere::with_transformation(transformation).unwrap();
        let normal = sphere
            .normal_at(Point::new(0., FRAC_1_SQRT_2, -FRAC_1_SQRT_2))
            .unwrap();

        assert_approx_eq!(normal, Vector::new(0., 0.970143, -0.242536));
    }

    #[test]
    fn normal_on_positioned_sphere() {
        let sphere = Sphere::new().with_position(Point::new(1., 0., 0.));
        assert_eq!(
            sphere.normal_at(Point::new(2., 0., 0.)),
            Ok(Vector::new(1., 0., 0.))
        );
    }

    #[test]
    fn normal_at_position_fails() {
        let sphere = Sphere::new();
        assert_eq!(sphere.normal_at(Point::zero()), Err(Error::ZeroMagnitude));
    }
}
