use derive_builder::Builder;

use crate::math::color::Color;

/// Phong surface parameters.
#[derive(Clone, Copy, Debug, PartialEq, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct Material {
    pub color: Color,
    pub ambient: f64,   // [0;+inf)
    pub diffuse: f64,   // [0;+inf)
    pub specular: f64,  // [0;+inf)
    pub shininess: f64, // (0;+inf), typically 10 to 200
}

impl MaterialBuilder {
    fn validate(&self) -> Result<(), String> {
        let weights = [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ];
        for (name, value) in weights {
            if let Some(value) = value.filter(|v| *v < 0.) {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }
        if let Some(shininess) = self.shininess.filter(|s| *s <= 0.) {
            return Err(format!("shininess must be positive, got {shininess}"));
        }
        Ok(())
    }
}

impl Material {
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
        }
    }
}
