pub mod material;
pub mod sphere;

use material::Material;
use sphere::Sphere;

use crate::{
    error::Result,
    math::{matrix::Matrix4, point::Point, vector::Vector},
    render::ray::Ray,
};

/// Every kind of object a ray can hit.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Intersection times of a ray already in object space, smaller first.
    pub fn local_intersect(&self, object_ray: &Ray) -> Option<[f64; 2]> {
        match self {
            Shape::Sphere(sphere) => sphere.local_intersect(object_ray),
        }
    }

    pub fn normal_at(&self, world_point: Point) -> Result<Vector> {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(world_point),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }

    pub fn transformation(&self) -> &Matrix4 {
        match self {
            Shape::Sphere(sphere) => sphere.transformation(),
        }
    }

    pub fn transformation_inverse(&self) -> &Matrix4 {
        match self {
            Shape::Sphere(sphere) => sphere.transformation_inverse(),
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Shape::Sphere(sphere) => Some(sphere),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Sphere(Sphere::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{color::Color, tuple::Tuple};

    #[test]
    fn dispatches_to_sphere() {
        let sphere = Sphere::with_transformation(Matrix4::scaling_uniform(2.))
            .unwrap()
            .with_material(Material::with_color(Color::red()));
        let shape = Shape::from(sphere.clone());

        assert_eq!(shape.material(), sphere.material());
        assert_eq!(shape.transformation(), sphere.transformation());
        assert_eq!(
            shape.transformation_inverse(),
            &Matrix4::scaling_uniform(0.5)
        );
        assert_eq!(
            shape.normal_at(Point::new(0., 2., 0.)),
            Ok(Vector::new(0., 1., 0.))
        );
        assert_eq!(shape.as_sphere(), Some(&sphere));
    }

    #[test]
    fn local_intersect_ignores_transformation() {
        let shape = Shape::from(Sphere::with_transformation(Matrix4::scaling_uniform(2.)).unwrap());
        let ray = Ray::new(Point::new(0., 0., -5.), Vector::new(0., 0., 1.));

        assert_eq!(shape.local_intersect(&ray), Some([4., 6.]));
    }
}
