//! Synthetic series generator
//!
//! Every metric is a linear trend plus independent Gaussian noise, laid out on
//! the metric's cadence over the full 2000-2035 window. Nothing is cached: a
//! fresh generator draws fresh values, so two renders differ unless a seed is
//! configured.
//!
//! Each metric, and the grid for each date, draws from its own stream. With a
//! seed, a stream's values do not depend on what else was generated first.

use chrono::{Datelike, NaiveDate};
use rand::prelude::*;
use rand_distr::StandardNormal;
use serde::Deserialize;

use super::types::{window_end, window_start, GridPoint, Metric, TimeSeries, TimeSeriesPoint};

/// Stream ids below this belong to metrics; grid streams start here
const GRID_STREAM: u64 = 16;

/// Configuration for the synthetic generator
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output (None = OS entropy per generator)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of latitude rows in the SST grid
    #[serde(default = "default_grid_lat_steps")]
    pub grid_lat_steps: usize,
    /// Number of longitude columns in the SST grid
    #[serde(default = "default_grid_lon_steps")]
    pub grid_lon_steps: usize,
}

fn default_grid_lat_steps() -> usize {
    180
}

fn default_grid_lon_steps() -> usize {
    3
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            grid_lat_steps: default_grid_lat_steps(),
            grid_lon_steps: default_grid_lon_steps(),
        }
    }
}

impl GeneratorConfig {
    /// Builder: fix the seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Produces the dashboard's synthetic series
pub struct SyntheticGenerator {
    config: GeneratorConfig,
    /// Source of per-stream seeds when no seed is configured
    entropy: StdRng,
}

impl SyntheticGenerator {
    /// Create a generator; seeded from entropy unless the config fixes a seed
    pub fn new(config: GeneratorConfig) -> Self {
        let entropy = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, entropy }
    }

    /// RNG for one stream
    fn stream_rng(&mut self, stream: u64) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(stream_seed(seed, stream)),
            None => StdRng::seed_from_u64(self.entropy.gen()),
        }
    }

    /// Generate one metric over the full window
    pub fn generate(&mut self, metric: Metric) -> TimeSeries {
        let dates = metric.cadence().dates(window_start(), window_end());
        let mut rng = self.stream_rng(metric_stream(metric));

        let points = match metric {
            Metric::GlobalSst => trend(&mut rng, &dates, 15.0, 0.02, 0.1),
            Metric::KoreaSst => trend(&mut rng, &dates, 16.0, 0.03, 0.2),
            Metric::SeoulHeatwave => dates
                .iter()
                .enumerate()
                .map(|(i, &date)| {
                    let draw = normal(&mut rng, 15.0, 5.0);
                    TimeSeriesPoint::new(date, heatwave_days(draw, i))
                })
                .collect(),
            Metric::KoreaSeaLevel => {
                let mut level = 0.0;
                dates
                    .iter()
                    .map(|&date| {
                        level += 3.0 + normal(&mut rng, 0.0, 0.5);
                        TimeSeriesPoint::new(date, level)
                    })
                    .collect()
            }
        };

        tracing::debug!(metric = %metric, points = points.len(), "Generated series");
        TimeSeries::new(metric, points)
    }

    /// Generate all four tabular metrics in dashboard order
    pub fn generate_all(&mut self) -> Vec<TimeSeries> {
        Metric::all().iter().map(|&m| self.generate(m)).collect()
    }

    /// Generate the global SST snapshot for one date
    ///
    /// Points are row-major: latitude outer, longitude inner.
    pub fn generate_grid(&mut self, date: NaiveDate) -> Vec<GridPoint> {
        let months = (date.year() - 2000) * 12 + date.month() as i32;
        let baseline = 15.0 + 0.02 * months as f64;

        let lats = linspace(-90.0, 90.0, self.config.grid_lat_steps);
        let lons = linspace(-180.0, 180.0, self.config.grid_lon_steps);
        let mut rng = self.stream_rng(grid_stream(date));

        let mut grid = Vec::with_capacity(lats.len() * lons.len());
        for &latitude in &lats {
            for &longitude in &lons {
                grid.push(GridPoint {
                    latitude,
                    longitude,
                    value: normal(&mut rng, baseline, 2.0),
                });
            }
        }

        tracing::debug!(%date, cells = grid.len(), "Generated SST grid");
        grid
    }
}

fn metric_stream(metric: Metric) -> u64 {
    match metric {
        Metric::GlobalSst => 0,
        Metric::KoreaSst => 1,
        Metric::SeoulHeatwave => 2,
        Metric::KoreaSeaLevel => 3,
    }
}

fn grid_stream(date: NaiveDate) -> u64 {
    GRID_STREAM + u64::from(date.num_days_from_ce().unsigned_abs())
}

/// Seed of one stream under a configured seed
fn stream_seed(seed: u64, stream: u64) -> u64 {
    seed ^ (stream + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// One draw from N(mean, std_dev)
fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

/// `base + slope * i + N(0, noise)` over the given dates
fn trend(rng: &mut StdRng, dates: &[NaiveDate], base: f64, slope: f64, noise: f64) -> Vec<TimeSeriesPoint> {
    dates
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let value = base + slope * i as f64 + normal(rng, 0.0, noise);
            TimeSeriesPoint::new(date, value)
        })
        .collect()
}

/// Heatwave days for year `index` given a N(15, 5) draw, clamped at zero
fn heatwave_days(draw: f64, index: usize) -> f64 {
    (draw + 0.2 * index as f64).max(0.0)
}

/// `n` evenly spaced values from `start` to `end`, both inclusive
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
