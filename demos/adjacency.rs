//! Build a few small matrices and print them densely.
//!
//! Run with `cargo run --example adjacency`.

use gridmat::{
    adjmat, interleave, Adjacency, BoundaryCondition, GridExtent, GridmatError, Stencil7p,
    WeightFn,
};

fn main() -> Result<(), GridmatError> {
    env_logger::init();

    // A 2D flow-through-a-pipe configuration: periodic along x, fixed
    // elsewhere.
    let extent = GridExtent::new(4, 4, 1)?;
    let mut adjacency = Adjacency::from(Stencil7p::with_boundaries(
        BoundaryCondition::Periodic,
        BoundaryCondition::Fixed,
        BoundaryCondition::Fixed,
    ));
    let pipe = adjmat(extent, &mut adjacency, &mut WeightFn::constant(1.0))?;
    println!("periodic-x adjacency matrix:\n{}", pipe.to_dense());

    // Interleave it with a random-weighted variant of itself.
    let mut adjacency = Adjacency::from(Stencil7p::new());
    let noisy = adjmat(extent, &mut adjacency, &mut WeightFn::uniform_random(42))?;
    let mixed = interleave(&[pipe, noisy], &[1.0, 1.0], 2, 42)?;
    println!("interleaved matrix:\n{}", mixed.to_dense());

    Ok(())
}
