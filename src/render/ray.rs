use crate::math::{matrix::Matrix4, point::Point, transform::Transform, vector::Vector};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Transform for Ray {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = self.transform_new(matrix);
    }

    fn transform_new(&self, matrix: &Matrix4) -> Self {
        Self::new(matrix * self.origin, matrix * self.direction)
    }
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Point reached after travelling for `time` along the ray.
    pub fn position(&self, time: f64) -> Point {
        self.origin + self.direction * time
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn direction(&self) -> &Vector {
        &self.direction
    }
}
