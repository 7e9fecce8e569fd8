//! # SLE Plot Graphs
//!
//! Input parsing, CDF binning, and chart rendering for the SLE Plot tools.
//!
//! Samples and point series are read from plain text files, reduced to
//! plottable curves, and drawn with plotters onto a bitmap backend.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cdf;
pub mod input;
pub mod palette;
pub mod reference;
pub mod traits;
pub mod utils;

pub mod cdf_chart;
pub mod xy_chart;

pub use cdf::*;
pub use cdf_chart::*;
pub use input::*;
pub use palette::*;
pub use reference::*;
pub use traits::*;
pub use utils::*;
pub use xy_chart::*;
