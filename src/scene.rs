pub mod io;
pub mod light;
pub mod object;

use std::time::Instant;

use derive_builder::Builder;
use indicatif::{ProgressBar, ProgressIterator};
use log::{debug, info};

use light::{PointLightSource, lighting};
use object::{Shape, material::MaterialBuilderError};

use crate::{
    error::{Error, Result},
    math::{
        color::Color,
        index::{Column, Row},
        point::Point,
        tuple::Tuple,
    },
    render::{
        canvas::Canvas,
        intersection::{hit, intersect_all},
        ray::Ray,
    },
};

/// Spheres lit by one point light, viewed from `eye` through a square wall
/// placed at `z = wall_z`. Every canvas pixel maps onto a spot of the wall
/// and is shaded by the first sphere the ray towards it hits.
#[derive(PartialEq, Debug, Clone, Builder)]
#[builder(default, derive(Debug), build_fn(validate = "Self::validate"))]
pub struct Scene {
    #[builder(setter(custom))]
    objects: Vec<Shape>,
    light: PointLightSource,
    eye: Point,
    wall_z: f64,
    /// Side of the wall in world units.
    wall_size: f64,
    /// Color of pixels whose ray hits nothing.
    background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            light: PointLightSource::default(),
            eye: Point::new(0., 0., -5.),
            wall_z: 10.,
            wall_size: 7.,
            background: Color::black(),
        }
    }
}

impl SceneBuilder {
    pub fn add_object(&mut self, object: impl Into<Shape>) -> &mut Self {
        self.objects
            .get_or_insert_with(Vec::new)
            .push(object.into());
        self
    }

    pub fn objects(&mut self, objects: Vec<Shape>) -> &mut Self {
        self.objects = Some(objects);
        self
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(size) = self.wall_size.filter(|s| !s.is_finite() || *s <= 0.) {
            return Err(format!("wall size must be positive, got {size}"));
        }
        if let Some(z) = self.wall_z.filter(|z| !z.is_finite()) {
            return Err(format!("wall z must be finite, got {z}"));
        }
        Ok(())
    }
}

impl From<SceneBuilderError> for Error {
    fn from(err: SceneBuilderError) -> Self {
        Error::InvalidScene(err.to_string())
    }
}

impl From<MaterialBuilderError> for Error {
    fn from(err: MaterialBuilderError) -> Self {
        Error::InvalidScene(err.to_string())
    }
}

impl Scene {
    pub fn objects(&self) -> &[Shape] {
        &self.objects
    }

    pub fn light(&self) -> &PointLightSource {
        &self.light
    }

    pub fn eye(&self) -> Point {
        self.eye
    }

    pub fn wall_z(&self) -> f64 {
        self.wall_z
    }

    pub fn wall_size(&self) -> f64 {
        self.wall_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn add_object(&mut self, object: impl Into<Shape>) {
        self.objects.push(object.into());
    }

    /// Ray from the eye through the wall spot seen at the given pixel.
    /// The top left pixel looks at the top left corner of the wall.
    pub fn ray_for_pixel(
        &self,
        column: Column,
        row: Row,
        width: usize,
        height: usize,
    ) -> Result<Ray> {
        let half = self.wall_size / 2.;
        let pixel_width = self.wall_size / width as f64;
        let pixel_height = self.wall_size / height as f64;

        let world_x = -half + pixel_width * column.value() as f64;
        let world_y = half - pixel_height * row.value() as f64;
        let target = Point::new(world_x, world_y, self.wall_z);

        Ok(Ray::new(self.eye, (target - self.eye).normalize()?))
    }

    /// Shades the closest visible hit of `ray`, or returns the background.
    pub fn color_for_ray(&self, ray: &Ray) -> Result<Color> {
        let intersections = intersect_all(&self.objects, ray);
        let Some(hit) = hit(&intersections) else {
            return Ok(self.background);
        };

        let point = ray.position(hit.time());
        let normal = hit.object().normal_at(point)?;
        let eye = -*ray.direction();

        lighting(hit.object().material(), &self.light, point, eye, normal)
    }

    /// Renders pixel after pixel, row by row, on the calling thread.
    pub fn render(
        &self,
        width: usize,
        height: usize,
        progressbar: Option<ProgressBar>,
    ) -> Result<Canvas> {
        info!(
            "rendering {} objects at {}x{} resolution",
            self.objects.len(),
            width,
            height
        );
        debug!(
            "eye at {}, wall at z = {} with size {}",
            self.eye, self.wall_z, self.wall_size
        );

        let now = Instant::now();
        let mut canvas = Canvas::with_color(width, height, self.background);

        let pb = progressbar.unwrap_or_else(ProgressBar::hidden);
        pb.set_length((width * height) as u64);

        let pixels = Row::range(Row(height))
            .flat_map(|row| Column::range(Column(width)).map(move |column| (column, row)));
        for (column, row) in pixels.progress_with(pb) {
            let ray = self.ray_for_pixel(column, row, width, height)?;
            canvas.write_pixel(column, row, self.color_for_ray(&ray)?)?;
        }

        let elapsed = now.elapsed();
        info!("render time: {:?}", elapsed);
        if !elapsed.is_zero() {
            let rays_per_sec = (width * height) as f64 / elapsed.as_secs_f64();
            debug!("rays per second: {}", rays_per_sec.round());
        }
        Ok(canvas)
    }
}
