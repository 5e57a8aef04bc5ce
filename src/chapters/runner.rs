use std::fmt::Display;

use clap::ValueEnum;
use indicatif::ProgressBar;
use log::info;

use crate::{error::Result, render::canvas::Canvas};

use super::{clock, projectile, shading, silhouette};

/// Built-in demo pictures, each exercising a bigger part of the kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Chapter {
    /// Trajectory of a projectile under gravity and wind.
    Projectile,
    /// Hour marks of a clock face made with rotations.
    Clock,
    /// Flat silhouette of a sphere, only hit or miss.
    Silhouette,
    /// Phong shaded sphere lit by a point light.
    Shading,
}

impl Chapter {
    pub fn default_size(self) -> (usize, usize) {
        match self {
            Chapter::Projectile => (projectile::DEFAULT_WIDTH, projectile::DEFAULT_HEIGHT),
            Chapter::Clock => (clock::DEFAULT_SIZE, clock::DEFAULT_SIZE),
            Chapter::Silhouette => (silhouette::DEFAULT_SIZE, silhouette::DEFAULT_SIZE),
            Chapter::Shading => (shading::DEFAULT_SIZE, shading::DEFAULT_SIZE),
        }
    }
}

impl Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chapter::Projectile => write!(f, "projectile"),
            Chapter::Clock => write!(f, "clock"),
            Chapter::Silhouette => write!(f, "silhouette"),
            Chapter::Shading => write!(f, "shading"),
        }
    }
}

/// Draws the chapter's picture. Missing dimensions fall back to the chapter's own.
pub fn run(
    chapter: Chapter,
    width: Option<usize>,
    height: Option<usize>,
    progressbar: Option<ProgressBar>,
) -> Result<Canvas> {
    let (default_width, default_height) = chapter.default_size();
    let width = width.unwrap_or(default_width);
    let height = height.unwrap_or(default_height);
    info!("running chapter {chapter} at {width}x{height}");

    match chapter {
        Chapter::Projectile => projectile::run(width, height),
        Chapter::Clock => clock::run(width, height),
        Chapter::Silhouette => silhouette::run(width, height),
        Chapter::Shading => shading::run(width, height, progressbar),
    }
}
