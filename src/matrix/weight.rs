//! Weight function protocol and preset weight functions.
//!
//! A weight function computes the numeric value of one matrix entry. The
//! traversal context it may draw on varies by use case, so the capability is
//! a sum type with one variant per call shape. The shape is fixed when the
//! value is constructed; an unsupported shape cannot be expressed at all.

use rand::prelude::*;

use crate::grid::{midpoint, Coords, GridExtent};

/// Value computation for matrix entries, dispatched on call shape.
///
/// Variants may carry state across calls within one matrix build (the
/// uniform-random preset keeps its generator inside the closure). State is
/// confined to the `WeightFn` value; sharing it across builds requires
/// explicitly passing the same instance.
pub enum WeightFn<N> {
    /// No traversal context: constant-like or generator-driven values.
    Nullary(Box<dyn FnMut() -> N>),
    /// Value from the matrix entry's (row, column).
    ByEntry(Box<dyn FnMut((usize, usize)) -> N>),
    /// Value from the geometric positions of the node and its neighbor.
    ByGeometry(Box<dyn FnMut(Coords, Coords) -> N>),
    /// As `ByGeometry` with the grid extent, for weights needing relative
    /// positions (the sinusoidal presets).
    ByGeometryExtent(Box<dyn FnMut(Coords, Coords, GridExtent) -> N>),
    /// Entry coordinates plus both geometric positions.
    Full(Box<dyn FnMut((usize, usize), Coords, Coords) -> N>),
}

impl<N> WeightFn<N> {
    pub fn nullary(f: impl FnMut() -> N + 'static) -> Self {
        Self::Nullary(Box::new(f))
    }

    pub fn by_entry(f: impl FnMut((usize, usize)) -> N + 'static) -> Self {
        Self::ByEntry(Box::new(f))
    }

    pub fn by_geometry(f: impl FnMut(Coords, Coords) -> N + 'static) -> Self {
        Self::ByGeometry(Box::new(f))
    }

    pub fn by_geometry_extent(f: impl FnMut(Coords, Coords, GridExtent) -> N + 'static) -> Self {
        Self::ByGeometryExtent(Box::new(f))
    }

    pub fn full(f: impl FnMut((usize, usize), Coords, Coords) -> N + 'static) -> Self {
        Self::Full(Box::new(f))
    }

    /// Evaluate the function with whatever context its shape asks for.
    pub(crate) fn evaluate(
        &mut self,
        entry: (usize, usize),
        coords: Coords,
        neighbor: Coords,
        extent: GridExtent,
    ) -> N {
        match self {
            Self::Nullary(f) => f(),
            Self::ByEntry(f) => f(entry),
            Self::ByGeometry(f) => f(coords, neighbor),
            Self::ByGeometryExtent(f) => f(coords, neighbor, extent),
            Self::Full(f) => f(entry, coords, neighbor),
        }
    }
}

impl<N: Copy + 'static> WeightFn<N> {
    /// Constant weight for every entry.
    pub fn constant(value: N) -> Self {
        Self::nullary(move || value)
    }
}

impl WeightFn<f64> {
    /// Uniform weights in [0, 1) from a deterministically seeded generator.
    pub fn uniform_random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::nullary(move || rng.gen::<f64>())
    }

    /// Uniform weights in [0, 1) from a fresh process-entropy seed.
    pub fn uniform_random_from_entropy() -> Self {
        let mut rng = StdRng::from_entropy();
        Self::nullary(move || rng.gen::<f64>())
    }

    /// Sinusoidal weight evaluated at the midpoint between node and
    /// neighbor, with one frequency per axis relative to the grid extent.
    pub fn sinusoidal(fx: f64, fy: f64, fz: f64) -> Self {
        Self::by_geometry_extent(move |coords, neighbor, extent| {
            let m = midpoint(coords, neighbor);
            let tau = std::f64::consts::TAU;
            (tau * fx * m[0] / extent.nx as f64).sin()
                + (tau * fy * m[1] / extent.ny as f64).sin()
                + (tau * fz * m[2] / extent.nz as f64).sin()
        })
    }
}
