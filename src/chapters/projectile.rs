use log::{info, warn};

use crate::{
    error::Result,
    math::{color::Color, point::Point, tuple::Tuple, vector::Vector},
    render::canvas::Canvas,
};

pub const DEFAULT_WIDTH: usize = 900;
pub const DEFAULT_HEIGHT: usize = 550;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Point,
    pub velocity: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: Vector,
    pub wind: Vector,
}

impl Projectile {
    pub fn new(position: Point, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    /// Moves by the current velocity, then lets the environment act on it.
    pub fn tick(&self, env: &Environment) -> Self {
        Self {
            position: self.position + self.velocity,
            velocity: self.velocity + env.gravity + env.wind,
        }
    }
}

/// Every position of the projectile, starting with its initial one, until it
/// falls to or below the ground (`y <= 0`). The position below the ground
/// isn't included.
pub fn trajectory(start: Projectile, env: &Environment) -> Vec<Point> {
    let mut points = Vec::new();
    let mut projectile = start;
    loop {
        points.push(projectile.position);
        projectile = projectile.tick(env);
        if projectile.position.y() <= 0. {
            break;
        }
    }
    points
}

pub fn run(width: usize, height: usize) -> Result<Canvas> {
    let start = Projectile::new(
        Point::new(0., 1., 0.),
        Vector::new(1., 1.8, 0.).normalize()? * 11.25,
    );
    let env = Environment {
        gravity: Vector::new(0., -0.1, 0.),
        wind: Vector::new(-0.01, 0., 0.),
    };
    let color = Color::new(0.25, 1., 0.);

    let points = trajectory(start, &env);
    info!("projectile flew through {} positions", points.len());

    let mut canvas = Canvas::new(width, height);
    for point in points {
        if let Err(err) = canvas.write_pixel_at_point(point, color) {
            warn!("skipping projectile position {point}: {err}");
        }
    }
    Ok(canvas)
}
