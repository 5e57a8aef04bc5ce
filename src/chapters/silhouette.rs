use crate::{
    error::Result,
    math::{
        color::Color,
        index::{Column, Row},
        matrix::Matrix4,
        point::Point,
        tuple::Tuple,
    },
    render::{canvas::Canvas, intersection::intersect, ray::Ray},
    scene::object::{Shape, sphere::Sphere},
};

pub const DEFAULT_SIZE: usize = 100;

/// Flat shadow of a stretched sphere: rays go from a fixed point towards every
/// pixel laid out on the `z = 0` plane, and the ones that miss get lit.
pub fn run(width: usize, height: usize) -> Result<Canvas> {
    let light_color = Color::new(1., 1., 0.5);
    let origin = Point::new(50., 50., -50.);
    let sphere: Shape = Sphere::with_transformation(Matrix4::scaling(10., 15., 10.))?
        .with_position(Point::new(2., 1.5, -1.))
        .into();

    let mut canvas = Canvas::new(width, height);
    for row in Row::range(Row(height)) {
        for column in Column::range(Column(width)) {
            let target = Point::new(column.value() as f64, row.value() as f64, 0.);
            let ray = Ray::new(origin, (target - origin).normalize()?);
            if intersect(&sphere, &ray).is_empty() {
                canvas.write_pixel(column, row, light_color)?;
            }
        }
    }
    Ok(canvas)
}
