pub mod cli;
pub mod error;
pub mod logger;
pub mod scene;

pub use error::{Error, Result};

pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod index;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
}

pub mod chapters {
    pub mod clock;
    pub mod projectile;
    pub mod runner;
    pub mod shading;
    pub mod silhouette;

    pub use runner::{Chapter, run};
}
