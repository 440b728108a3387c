//! Draws 1000 samples of each law of the continuous gallery and prints the
//! histogram next to the density at the center of each bin.
//!
//! Run with `RUST_LOG=debug cargo run --example continuous_gallery`.

use ProbabilityLaws::{
    Distribution,
    distributions::{ContinuousFamily, Uniform::Uniform},
    errors::DistrError,
    gallery,
    histogram::{Histogram, histogram},
    samples::Samples,
};

const NUM_SAMPLES: usize = 1000;
const NUM_BINS: usize = 12;

fn main() -> Result<(), DistrError> {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }

    for law in gallery::continuous_gallery()? {
        report(&law)?;
    }

    // Second moment of the standard uniform: 1/3
    let uniform: Uniform = Uniform::new(0.0, 1.0)?;
    let uniform_draws: Samples = Samples::new_move(uniform.sample_multiple(10_000)?)?;
    println!(
        "Uniform(0, 1) second moment: {:.5} (numerical) {:.5} (10000 samples)",
        uniform.moment(2)?,
        uniform_draws.raw_moment(2)?
    );

    return Ok(());
}

fn report(law: &ContinuousFamily) -> Result<(), DistrError> {
    let draws: Vec<f64> = law.sample_multiple(NUM_SAMPLES)?;
    let hist: Histogram = histogram()
        .samples(&draws)
        .bins(NUM_BINS)
        .density(true)
        .call()?;

    let mut samples: Samples = Samples::new_move(draws)?;

    println!("== {} ==", law.name());
    println!(
        "mean: {:.4} (sample) {:?} (exact)",
        samples.mean(),
        law.expected_value()
    );
    println!(
        "variance: {:?} (sample) {:?} (exact)",
        samples.variance(),
        law.variance()
    );

    for (i, height) in hist.heights.iter().enumerate() {
        let center: f64 = 0.5 * (hist.edges[i] + hist.edges[i + 1]);
        println!(
            "{center:>10.4} | {height:>8.4} | f(x) = {:>8.4}",
            law.pdf(center)
        );
    }
    println!();

    return Ok(());
}
