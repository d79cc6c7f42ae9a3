//! Chart-ready views, one per panel of the statistics dashboard.
//!
//! Each view is a fixed composition of the [`query`](crate::query) stages
//! and returns plain serialisable data; rendering is somebody else's job.

pub mod bar;
pub mod line;
pub mod map;

use crate::query::GroupTotal;
use crate::table::{CASE_COUNT, DEATH_COUNT};
use serde::Serialize;
use std::{fmt, str::FromStr};

pub use bar::{cases_vs_deaths, state_cancer_totals, state_top_rows};
pub use line::{cases_by_population, PopulationPoint};
pub use map::{choropleth, MapPoint};

/// Row cap used by the bar charts.
pub const DEFAULT_TOP_N: usize = 20;

/// Which count a view plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Measure {
    CaseCount,
    DeathCount,
}

impl Measure {
    /// Column holding this measure.
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::CaseCount => CASE_COUNT,
            Measure::DeathCount => DEATH_COUNT,
        }
    }

    /// Series name shown in a legend.
    pub fn label(&self) -> &'static str {
        match self {
            Measure::CaseCount => "Cases",
            Measure::DeathCount => "Deaths",
        }
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casecount" | "cases" => Ok(Measure::CaseCount),
            "deathcount" | "deaths" => Ok(Measure::DeathCount),
            other => Err(format!("unknown measure `{other}`")),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bar or marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: Option<i64>,
}

impl From<GroupTotal> for Point {
    fn from(g: GroupTotal) -> Self {
        Self {
            label: g.key,
            value: Some(g.total),
        }
    }
}

/// A named sequence of points, one trace of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().collect(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }
}

/// `top_n` when bounded, everything otherwise.
pub(crate) fn cap<T>(rows: Vec<T>, n: Option<usize>) -> Vec<T> {
    match n {
        Some(n) => crate::query::top_n(rows, n),
        None => rows,
    }
}
