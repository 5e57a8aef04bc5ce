use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use clap::ValueEnum;

use crate::{
    error::{Error, Result},
    math::{
        approx_eq::round_to_index,
        color::Color,
        index::{Column, Row},
        point::Point,
        tuple::Tuple,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Ppm,
    Png,
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Ppm => write!(f, "ppm"),
            ImageFormat::Png => write!(f, "png"),
        }
    }
}

/// Grid of colors, stored row after row.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn with_color(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; height * width],
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::with_color(width, height, Color::black())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, column: Column, row: Row) -> Result<usize> {
        if column.value() >= self.width || row.value() >= self.height {
            return Err(Error::CanvasIndexOutOfBounds {
                column,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width * row.value() + column.value())
    }

    pub fn pixel_at(&self, column: Column, row: Row) -> Result<Color> {
        let id = self.index(column, row)?;
        Ok(self.pixels[id])
    }

    pub fn write_pixel(&mut self, column: Column, row: Row, color: Color) -> Result<()> {
        let id = self.index(column, row)?;
        self.pixels[id] = color;
        Ok(())
    }

    /// Maps a point onto the canvas with the y axis pointing up:
    /// `column = round(x)`, `row = height - round(y)`.
    pub fn point_to_index(&self, point: Point) -> Result<(Column, Row)> {
        let off_canvas = || Error::PointOffCanvas {
            x: point.x(),
            y: point.y(),
        };
        let column = round_to_index(point.x()).ok_or_else(off_canvas)?;
        let row = round_to_index(self.height as f64 - point.y().round()).ok_or_else(off_canvas)?;
        Ok((Column(column), Row(row)))
    }

    pub fn pixel_at_point(&self, point: Point) -> Result<Color> {
        let (column, row) = self.point_to_index(point)?;
        self.pixel_at(column, row)
    }

    pub fn write_pixel_at_point(&mut self, point: Point, color: Color) -> Result<()> {
        let (column, row) = self.point_to_index(point)?;
        self.write_pixel(column, row, color)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn as_u8_rgb(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color.as_scaled_values())
            .collect()
    }

    pub fn save_to_file(&self, file: File, format: ImageFormat) -> std::io::Result<()> {
        match format {
            ImageFormat::Ppm => self.save_to_ppm(file),
            ImageFormat::Png => self.save_to_png(file),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> std::io::Result<()> {
        self.save_to_file(File::create(path)?, format)
    }
}

/// saving image in ppm format
impl Canvas {
    const MAX_LINE_LEN: usize = 70;

    fn ppm_header(&self) -> String {
        format!("P3\n{} {}\n255\n", self.width, self.height)
    }

    /// Pixel rows, each starting on its own line. A line is broken before a
    /// color that would push it past 70 characters, so the three channels of
    /// one color always stay together.
    fn ppm_data(&self) -> String {
        let mut data = String::new();
        if self.width == 0 {
            return data;
        }

        for row in self.pixels.chunks(self.width) {
            let mut line = String::new();
            for color in row {
                let [r, g, b] = color.as_scaled_values();
                let pixel = format!("{r} {g} {b}");

                if line.is_empty() {
                    line = pixel;
                } else if line.len() + 1 + pixel.len() > Self::MAX_LINE_LEN {
                    data.push_str(&line);
                    data.push('\n');
                    line = pixel;
                } else {
                    line.push(' ');
                    line.push_str(&pixel);
                }
            }
            data.push_str(&line);
            data.push('\n');
        }
        data
    }

    pub fn to_ppm(&self) -> String {
        self.ppm_header() + &self.ppm_data()
    }

    pub fn save_to_ppm(&self, file: File) -> std::io::Result<()> {
        let mut writer = BufWriter::new(file);
        writer.write_all(self.ppm_header().as_bytes())?;
        writer.write_all(self.ppm_data().as_bytes())?;
        writer.flush()
    }
}

/// saving image in png format
impl Canvas {
    pub fn save_to_png(&self, file: File) -> std::io::Result<()> {
        let width = png_dimension(self.width, "width")?;
        let height = png_dimension(self.height, "height")?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;

        writer
            .write_image_data(&self.as_u8_rgb())
            .map_err(|e| e.into())
    }
}

fn png_dimension(value: usize, name: &str) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("canvas {name} {value} does not fit in a png header"),
        )
    })
}
