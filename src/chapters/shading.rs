use indicatif::ProgressBar;

use crate::{
    error::Result,
    math::{color::Color, point::Point, tuple::Tuple},
    render::canvas::Canvas,
    scene::{
        Scene, SceneBuilder,
        light::PointLightSource,
        object::{material::MaterialBuilder, sphere::Sphere},
    },
};

pub const DEFAULT_SIZE: usize = 100;

pub fn scene() -> Result<Scene> {
    let material = MaterialBuilder::default()
        .color(Color::new(1., 0.2, 1.))
        .build()?;

    Ok(SceneBuilder::default()
        .add_object(Sphere::new().with_material(material))
        .light(PointLightSource::new(
            Point::new(-10., 10., -10.),
            Color::white(),
        ))
        .build()?)
}

pub fn run(width: usize, height: usize, progressbar: Option<ProgressBar>) -> Result<Canvas> {
    scene()?.render(width, height, progressbar)
}
