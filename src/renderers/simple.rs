// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, UInt};
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_polar_disk;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

/// Per-pixel multi-sample driver. Rows are rendered in parallel when
/// `parallel` is set; every pixel derives its generator seed from the run
/// seed and its coordinates, so the serial and parallel paths produce
/// byte-identical images.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    width: usize,
    height: usize,
    samples_per_pixel: UInt,
    seed: u64,
    parallel: bool,
}

impl SimpleRenderer {
    pub fn new(
        integrator: Box<dyn Integrator>,
        width: usize,
        height: usize,
        samples_per_pixel: UInt,
        seed: u64,
        parallel: bool,
    ) -> Self {
        Self {
            integrator,
            width,
            height,
            samples_per_pixel: samples_per_pixel.max(1),
            seed,
            parallel,
        }
    }

    fn pixel_seed(&self, x: usize, y: usize) -> u64 {
        ((self.seed & 0xFFF) << 32) | (((y as u64) & 0xFFFF) << 16) | ((x as u64) & 0xFFFF)
    }

    /// Estimate one pixel: stratified sub-pixel jitter, trace, average.
    fn render_pixel(&self, scene: &Scene, sensor: &dyn Sensor, x: usize, y: usize) -> RGBSpectrum {
        let spp = self.samples_per_pixel;
        let inv_spp = 1.0 / (spp as Float);
        let mut rng = LcgRng::new(self.pixel_seed(x, y));
        let mut color = RGBSpectrum::black();

        for i in 0..spp {
            let offset = sample_polar_disk(&rng.next_2d());

            // Each sample index picks one of four pixel quadrants; the
            // half-scaled disk offset jitters within it.
            let center_x = 0.5 * (((i % 2) as Float) * 2.0 - 1.0);
            let center_y = 0.5 * (if i % 4 < 2 { 1.0 } else { -1.0 });
            let deviation_x = offset.x / 2.0;
            let deviation_y = offset.y / 2.0;

            let ndc_x = ((x as Float + center_x + deviation_x) / (self.width as Float)) * 2.0 - 1.0;
            let ndc_y = ((y as Float + center_y + deviation_y) / (self.height as Float)) * 2.0 - 1.0;

            let ray = sensor.get_ray(ndc_x, ndc_y);
            color += self.integrator.trace_ray(scene, &ray, 0, &mut rng) * inv_spp;
        }

        color
    }

    fn render_row(&self, scene: &Scene, sensor: &dyn Sensor, y: usize) -> Vec<RGBSpectrum> {
        (0..self.width)
            .map(|x| self.render_pixel(scene, sensor, x, y))
            .collect()
    }

    fn row_progress(&self) -> ProgressBar {
        let progress = ProgressBar::new(self.height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress
    }

    fn render_serial(&self, scene: &Scene, sensor: &dyn Sensor) -> Bitmap {
        let mut bitmap = Bitmap::new(self.width, self.height);
        let progress = self.row_progress();
        for y in 0..self.height {
            let row = self.render_row(scene, sensor, y);
            bitmap.set_row(y, &row);
            progress.inc(1);
        }
        progress.finish_and_clear();
        bitmap
    }

    fn render_parallel(&self, scene: &Scene, sensor: &dyn Sensor) -> Bitmap {
        let mut bitmap = Bitmap::new(self.width, self.height);
        let progress = self.row_progress();

        let next_row = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(self.height.max(1));
        let (tx, rx) = mpsc::channel::<(usize, Vec<RGBSpectrum>)>();

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_row = Arc::clone(&next_row);
                let tx = tx.clone();
                scope.spawn(move || loop {
                    let y = next_row.fetch_add(1, Ordering::Relaxed);
                    if y >= self.height {
                        break;
                    }
                    let row = self.render_row(scene, sensor, y);
                    if tx.send((y, row)).is_err() {
                        break;
                    }
                });
            }

            drop(tx);
            for _ in 0..self.height {
                if let Ok((y, row)) = rx.recv() {
                    bitmap.set_row(y, &row);
                    progress.inc(1);
                }
            }
        });

        progress.finish_and_clear();
        bitmap
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene, sensor: &dyn Sensor) -> Bitmap {
        if self.width == 0 || self.height == 0 {
            return Bitmap::new(0, 0);
        }
        if self.parallel {
            self.render_parallel(scene, sensor)
        } else {
            self.render_serial(scene, sensor)
        }
    }
}

/* Tests for SimpleRenderer */
