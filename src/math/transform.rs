use super::{matrix::Matrix4, point::Point, tuple::Axis, vector::Vector};

impl Matrix4 {
    #[rustfmt::skip]
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::new([
            [1., 0., 0., x],
            [0., 1., 0., y],
            [0., 0., 1., z],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4 {
        Matrix4::new([
            [x, 0., 0., 0.],
            [0., y, 0., 0.],
            [0., 0., z, 0.],
            [0., 0., 0., 1.],
        ])
    }

    pub fn scaling_uniform(f: f64) -> Matrix4 {
        Self::scaling(f, f, f)
    }

    #[rustfmt::skip]
    pub fn rotation_x(radians: f64) -> Matrix4 {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix4::new([
            [1., 0., 0., 0.],
            [0., cos_r, -sin_r, 0.],
            [0., sin_r, cos_r, 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_y(radians: f64) -> Matrix4 {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix4::new([
            [cos_r, 0., sin_r, 0.],
            [0., 1., 0., 0.],
            [-sin_r, 0., cos_r, 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    pub fn rotation_z(radians: f64) -> Matrix4 {
        let sin_r = radians.sin();
        let cos_r = radians.cos();
        Matrix4::new([
            [cos_r, -sin_r, 0., 0.],
            [sin_r, cos_r, 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    pub fn rotation(axis: Axis, radians: f64) -> Matrix4 {
        match axis {
            Axis::X => Self::rotation_x(radians),
            Axis::Y => Self::rotation_y(radians),
            Axis::Z => Self::rotation_z(radians),
        }
    }

    /// Moves each coordinate in proportion to the other two,
    /// e.g. `x_prop_y` moves x in proportion to y.
    #[rustfmt::skip]
    pub fn shearing(
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> Matrix4 {
        Matrix4::new([
            [1., x_prop_y, x_prop_z, 0.],
            [y_prop_x, 1., y_prop_z, 0.],
            [z_prop_x, z_prop_y, 1., 0.],
            [0., 0., 0., 1.],
        ])
    }
}

/// Single named transformation, as written in scene files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    Translation(f64, f64, f64),
    Scaling(f64, f64, f64),
    Rotation(Axis, f64),
    Shearing(f64, f64, f64, f64, f64, f64),
    Identity,
}

impl Transformation {
    pub fn scaling_uniform(f: f64) -> Self {
        Self::Scaling(f, f, f)
    }
}

impl From<Transformation> for Matrix4 {
    fn from(val: Transformation) -> Self {
        match val {
            Transformation::Translation(x, y, z) => Matrix4::translation(x, y, z),
            Transformation::Scaling(x, y, z) => Matrix4::scaling(x, y, z),
            Transformation::Rotation(axis, radians) => Matrix4::rotation(axis, radians),
            Transformation::Shearing(xpy, xpz, ypx, ypz, zpx, zpy) => {
                Matrix4::shearing(xpy, xpz, ypx, ypz, zpx, zpy)
            }
            Transformation::Identity => Matrix4::IDENTITY,
        }
    }
}

/// Ordered list of transformations; the first one is applied first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transformations {
    data: Vec<Transformation>,
}

impl Transformations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vec(&self) -> &[Transformation] {
        &self.data
    }

    pub fn push(&mut self, t: Transformation) {
        self.data.push(t);
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<Vec<Transformation>> for Transformations {
    fn from(data: Vec<Transformation>) -> Self {
        Self { data }
    }
}

impl From<&[Transformation]> for Matrix4 {
    fn from(val: &[Transformation]) -> Self {
        val.iter().fold(Matrix4::IDENTITY, |acc, t| {
            acc.transform_new(&Matrix4::from(*t))
        })
    }
}

impl From<&Transformations> for Matrix4 {
    fn from(val: &Transformations) -> Self {
        Matrix4::from(val.vec())
    }
}

impl From<Transformations> for Matrix4 {
    fn from(val: Transformations) -> Self {
        Matrix4::from(&val)
    }
}

/// Something that can be moved around by a 4x4 matrix.
/// The chained helpers apply each new transformation after the ones before it.
pub trait Transform: Sized + Clone {
    fn transform(&mut self, matrix: &Matrix4);

    fn transform_new(&self, matrix: &Matrix4) -> Self {
        let mut copy = self.clone();
        copy.transform(matrix);
        copy
    }

    fn transformed(self) -> Self {
        self
    }

    fn transform_chain(&mut self, matrix: &Matrix4) -> &mut Self {
        self.transform(matrix);
        self
    }

    fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix4::translation(x, y, z))
    }

    fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.transform_chain(&Matrix4::scaling(x, y, z))
    }

    fn scale_uniform(&mut self, factor: f64) -> &mut Self {
        self.transform_chain(&Matrix4::scaling_uniform(factor))
    }

    fn rotate_x(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_x(radians))
    }

    fn rotate_y(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_y(radians))
    }

    fn rotate_z(&mut self, radians: f64) -> &mut Self {
        self.transform_chain(&Matrix4::rotation_z(radians))
    }

    fn sheare(
        &mut self,
        x_prop_y: f64,
        x_prop_z: f64,
        y_prop_x: f64,
        y_prop_z: f64,
        z_prop_x: f64,
        z_prop_y: f64,
    ) -> &mut Self {
        self.transform_chain(&Matrix4::shearing(
            x_prop_y, x_prop_z, y_prop_x, y_prop_z, z_prop_x, z_prop_y,
        ))
    }
}

impl Transform for Matrix4 {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = matrix * &*self;
    }
}

impl Transform for Point {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = matrix * *self;
    }
}

impl Transform for Vector {
    fn transform(&mut self, matrix: &Matrix4) {
        *self = matrix * *self;
    }
}
