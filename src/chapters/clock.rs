use std::f64::consts::TAU;

use log::warn;

use crate::{
    error::Result,
    math::{color::Color, matrix::Matrix4, point::Point, transform::Transform, tuple::Tuple},
    render::canvas::Canvas,
};

pub const DEFAULT_SIZE: usize = 300;
const HOURS: usize = 12;

/// Positions of the hour marks on a dial of the given radius centered at
/// `(center_x, center_y)`, starting at twelve o'clock and going around the z axis.
pub fn hour_marks(center_x: f64, center_y: f64, radius: f64) -> Vec<Point> {
    (0..HOURS)
        .map(|hour| {
            hour_transformation(hour, center_x, center_y, radius) * Point::new(0., 1., 0.)
        })
        .collect()
}

pub fn run(width: usize, height: usize) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height);
    let radius = width.min(height) as f64 / 3.;

    for mark in hour_marks(width as f64 / 2., height as f64 / 2., radius) {
        if let Err(err) = canvas.write_pixel_at_point(mark, Color::white()) {
            warn!("skipping hour mark {mark}: {err}");
        }
    }
    Ok(canvas)
}

/// The single transformation that moves twelve o'clock onto the given hour.
pub fn hour_transformation(hour: usize, center_x: f64, center_y: f64, radius: f64) -> Matrix4 {
    let angle = hour as f64 * TAU / HOURS as f64;
    Matrix4::scaling(0., radius, 0.)
        .rotate_z(angle)
        .translate(center_x, center_y, 0.)
        .transformed()
}
