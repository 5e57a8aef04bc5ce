use std::{fmt::Display, ops};

use super::{
    approx_eq::ApproxEq,
    tuple::{Axis, Tuple},
    vector::Vector,
};

#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Tuple for Point {
    fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn w(&self) -> f64 {
        1.
    }
}

impl ops::Index<Axis> for Point {
    type Output = f64;

    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Point {
    pub fn zero() -> Self {
        Self::new(0., 0., 0.)
    }
}

impl ApproxEq for Point {
    fn approx_eq_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        self.x.approx_eq_epsilon(&other.x, epsilon)
            && self.y.approx_eq_epsilon(&other.y, epsilon)
            && self.z.approx_eq_epsilon(&other.z, epsilon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}

impl ops::Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x + rhs.x(),
            y: self.y + rhs.y(),
            z: self.z + rhs.z(),
        }
    }
}

impl ops::AddAssign<Vector> for Point {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Self::Output {
        Self {
            x: self.x - rhs.x(),
            y: self.y - rhs.y(),
            z: self.z - rhs.z(),
        }
    }
}

impl ops::SubAssign<Vector> for Point {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn default_is_origin() {
        assert_approx_eq!(Point::default(), Point::new(0., 0., 0.));
        assert_approx_eq!(Point::zero(), Point::default());
    }

    #[test]
    fn equality() {
        let p = Point::new(4., -4., 3.);
        assert_eq!(p, Point::new(4., -4., 3.));
        assert_eq!(p, Point::new(4. + 1.0e-7, -4., 3.));
        assert_ne!(p, Point::new(4., 4., 3.));
    }

    #[test]
    fn w_is_one() {
        assert_eq!(Point::new(4., -4., 3.).w(), 1.);
    }

    #[test]
    fn add_vector() {
        assert_approx_eq!(
            Point::new(-2., 3., 1.) + Vector::new(3., -2., 5.),
            Point::new(1., 1., 6.)
        );
    }

    #[test]
    fn add_assign_vector() {
        let mut p = Point::new(-2., 3., 1.);
        p += Vector::new(3., -2., 5.);
        assert_approx_eq!(p, Point::new(1., 1., 6.));
    }

    #[test]
    fn sub_vector() {
        assert_approx_eq!(
            Point::new(3., 2., 1.) - Vector::new(5., 6., 7.),
            Point::new(-2., -4., -6.)
        );
    }

    #[test]
    fn sub_assign_vector() {
        let mut p = Point::new(3., 2., 1.);
        p -= Vector::new(5., 6., 7.);
        assert_approx_eq!(p, Point::new(-2., -4., -6.));
    }

    #[test]
    fn sub() {
        assert_approx_eq!(
            Point::new(3., 2., 1.) - Point::new(5., 6., 7.),
            Vector::new(-2., -4., -6.)
        );
    }

    #[test]
    fn index_by_axis() {
        let p = Point::new(1., 2., 3.);
        assert_eq!(p[Axis::X], 1.);
        assert_eq!(p[Axis::Y], 2.);
        assert_eq!(p[Axis::Z], 3.);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1., 2.5, -3.).to_string(), "Point(1, 2.5, -3)");
    }
}
