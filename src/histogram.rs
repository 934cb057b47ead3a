//! Histograms of the batch means.
//!
//! The values are bucketed in a fixed number of bins of equal width spanning
//! the observed range `[min, max]` (the maximum goes in the last bin). A
//! histogram can be printed ([Histogram::render_text]) or drawn to a PNG file
//! ([Histogram::save_png]).

use std::path::Path;

use image::{Rgb, RgbImage};
use log::debug;
use serde::Serialize;

use crate::{
    errors::{EstimationError, Result},
    samples::Samples,
};

/// A histogram with bins of equal width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub minimum: f64,
    /// Right edge of the last bin.
    pub maximum: f64,
    /// Number of values in each bin.
    pub counts: Vec<usize>,
}

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const BAR: Rgb<u8> = Rgb([70, 130, 180]);
const BAR_EDGE: Rgb<u8> = Rgb([30, 70, 110]);
const MARKER: Rgb<u8> = Rgb([200, 30, 30]);

impl Histogram {
    /// Buckets `data` into `bins` bins spanning `[min(data), max(data)]`.
    ///
    /// If all the values are equal, the range is widened to `[v - 0.5, v + 0.5]`.
    ///
    /// Returns [EstimationError::InvalidParameter] if `bins` is `0`, `data` is
    /// empty or contains non-finite values.
    pub fn new(data: &[f64], bins: usize) -> Result<Histogram> {
        let mut samples: Samples = Samples::new(data)?;
        return Histogram::from_samples(&mut samples, bins);
    }

    /// Same as [Histogram::new], reusing the (cached) minimum and maximum of
    /// `samples`.
    pub fn from_samples(samples: &mut Samples, bins: usize) -> Result<Histogram> {
        if bins == 0 {
            return Err(EstimationError::InvalidParameter(
                "a histogram needs at least 1 bin".to_string(),
            ));
        }
        let (Some(mut minimum), Some(mut maximum)) = (samples.minimum(), samples.maximum()) else {
            return Err(EstimationError::InvalidParameter(
                "can not build a histogram without data".to_string(),
            ));
        };

        if maximum <= minimum {
            minimum = minimum - 0.5;
            maximum = maximum + 0.5;
        }

        let mut ret: Histogram = Histogram {
            minimum,
            maximum,
            counts: vec![0; bins],
        };

        for &x in samples.peek_data() {
            let index: usize = ret.bin_index(x);
            ret.counts[index] += 1;
        }

        return Ok(ret);
    }

    /// Number of bins.
    #[must_use]
    pub fn bins(&self) -> usize {
        return self.counts.len();
    }

    #[must_use]
    pub fn bin_width(&self) -> f64 {
        return (self.maximum - self.minimum) / self.counts.len() as f64;
    }

    /// Total number of values in the histogram.
    #[must_use]
    pub fn total(&self) -> usize {
        return self.counts.iter().sum();
    }

    /// The `bins + 1` edges of the bins.
    #[must_use]
    pub fn bin_edges(&self) -> Vec<f64> {
        let width: f64 = self.bin_width();
        let n: usize = self.counts.len();
        return (0..=n)
            .map(|i: usize| {
                if i == n {
                    self.maximum
                } else {
                    self.minimum + width * i as f64
                }
            })
            .collect::<Vec<f64>>();
    }

    /// The index of the bin where `x` belongs. Values outside the range are
    /// clamped to the first or last bin.
    #[must_use]
    pub fn bin_index(&self, x: f64) -> usize {
        let n: usize = self.counts.len();
        let position: f64 = (x - self.minimum) / self.bin_width();
        if !(0.0 < position) {
            return 0;
        }
        return (position.floor() as usize).min(n - 1);
    }

    /// Renders the histogram as text, one line per bin:
    ///
    /// ```text
    /// [  1.6812,   1.6834) ######           3
    /// ```
    ///
    /// The longest bar has `width` characters.
    #[must_use]
    pub fn render_text(&self, width: usize) -> String {
        let max_count: usize = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let edges: Vec<f64> = self.bin_edges();
        let mut ret: String = String::new();

        for (i, &count) in self.counts.iter().enumerate() {
            let bar_len: usize = count * width / max_count;
            let bar: String = "#".repeat(bar_len);
            ret.push_str(&format!(
                "[{:>10.5}, {:>10.5}) {:<width$} {}\n",
                edges[i],
                edges[i + 1],
                bar,
                count,
                width = width
            ));
        }

        return ret;
    }

    /// Draws the histogram into a `width x height` image.
    ///
    /// If `marker` is inside the range of the histogram, a vertical red line is
    /// drawn at its position (to show the analytical value, for example).
    #[must_use]
    pub fn draw(&self, width: u32, height: u32, marker: Option<f64>) -> RgbImage {
        let mut img: RgbImage = RgbImage::from_pixel(width, height, BACKGROUND);

        let margin: u32 = (width.min(height) / 12).max(2);
        if width <= 2 * margin + 1 || height <= 2 * margin + 1 {
            return img;
        }

        let left: u32 = margin;
        let right: u32 = width - margin;
        let top: u32 = margin;
        let bottom: u32 = height - margin;
        let plot_width: f64 = f64::from(right - left);
        let plot_height: f64 = f64::from(bottom - top);

        let max_count: f64 = self.counts.iter().copied().max().unwrap_or(0).max(1) as f64;
        let n: f64 = self.counts.len() as f64;

        for (i, &count) in self.counts.iter().enumerate() {
            let x0: u32 = left + (plot_width * i as f64 / n) as u32;
            let x1: u32 = left + (plot_width * (i + 1) as f64 / n) as u32;
            let bar_height: u32 = (plot_height * count as f64 / max_count) as u32;
            if bar_height == 0 {
                continue;
            }
            let y0: u32 = bottom - bar_height;

            for x in x0..x1 {
                for y in y0..bottom {
                    let edge: bool = x == x0 || x + 1 == x1 || y == y0;
                    img.put_pixel(x, y, if edge { BAR_EDGE } else { BAR });
                }
            }
        }

        // axes
        for x in left..right {
            img.put_pixel(x, bottom, AXIS);
        }
        for y in top..=bottom {
            img.put_pixel(left, y, AXIS);
        }

        if let Some(value) = marker {
            if self.minimum <= value && value <= self.maximum {
                let relative: f64 = (value - self.minimum) / (self.maximum - self.minimum);
                let x: u32 = (left + (plot_width * relative) as u32).min(right - 1);
                for y in top..bottom {
                    img.put_pixel(x, y, MARKER);
                }
            }
        }

        return img;
    }

    /// Draws the histogram (see [Histogram::draw]) and saves it to `path`.
    ///
    /// The format is deduced from the extension (only PNG is enabled).
    pub fn save_png(&self, path: &Path, width: u32, height: u32, marker: Option<f64>) -> Result<()> {
        let img: RgbImage = self.draw(width, height, marker);
        img.save(path)?;
        debug!("Histogram saved to {}", path.display());
        return Ok(());
    }
}
