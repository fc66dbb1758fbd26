//! Chart specification types
//!
//! A `ChartSpec` is a Plotly figure (`data` + `layout`) tagged with the chart
//! family it was built as. The page hands `data` and `layout` straight to
//! `Plotly.newPlot`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::series::ChartKind;

/// A renderable chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Number of plotted points across all traces
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

/// One Plotly trace
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Trace {
    #[serde(rename = "scatter")]
    Scatter {
        mode: &'static str,
        name: String,
        x: Vec<NaiveDate>,
        y: Vec<f64>,
        hovertemplate: String,
    },
    #[serde(rename = "bar")]
    Bar {
        name: String,
        x: Vec<NaiveDate>,
        y: Vec<f64>,
        hovertemplate: String,
    },
    #[serde(rename = "densitymapbox")]
    DensityMapbox {
        lat: Vec<f64>,
        lon: Vec<f64>,
        z: Vec<f64>,
        radius: u32,
        hovertemplate: String,
    },
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Scatter { y, .. } | Trace::Bar { y, .. } => y.len(),
            Trace::DensityMapbox { z, .. } => z.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Figure layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

/// Base map settings for density maps
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mapbox {
    pub style: String,
    pub center: MapCenter,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}
