use crate::math::{color::Color, point::Point, tuple::Tuple};

/// Light with no size, shining equally in every direction.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PointLightSource {
    position: Point,
    intensity: Color,
}

impl Default for PointLightSource {
    fn default() -> Self {
        Self {
            position: Point::new(-10., 10., -10.),
            intensity: Color::white(),
        }
    }
}

impl PointLightSource {
    pub fn new(position: Point, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_position_and_intensity() {
        let light = PointLightSource::new(Point::zero(), Color::white());

        assert_eq!(light.position(), Point::zero());
        assert_eq!(light.intensity(), Color::white());
    }
}
