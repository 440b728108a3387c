//! Compares the cube of uniform draws in `[0, 2]` with draws of the
//! [YCube](ProbabilityLaws::distributions::YCube) law. Both histograms should
//! follow `f(y) = (1/6) * y^(-2/3)`.

use ProbabilityLaws::{
    Distribution,
    distributions::{Uniform::Uniform, YCube::YCube},
    errors::DistrError,
    histogram::{Histogram, histogram},
};

const NUM_SAMPLES: usize = 10_000;
const NUM_BINS: usize = 16;

fn main() -> Result<(), DistrError> {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }

    let uniform: Uniform = Uniform::new(0.0, 2.0)?;
    let cubes: Vec<f64> = uniform
        .sample_multiple(NUM_SAMPLES)?
        .into_iter()
        .map(|u: f64| u * u * u)
        .collect();

    let ycube: YCube = YCube::standard();
    let draws: Vec<f64> = ycube.sample_multiple(NUM_SAMPLES)?;

    let range: (f64, f64) = ycube.get_domain().get_bounds();
    let hist_cubes: Histogram = histogram()
        .samples(&cubes)
        .bins(NUM_BINS)
        .range(range)
        .density(true)
        .call()?;
    let hist_draws: Histogram = histogram()
        .samples(&draws)
        .bins(NUM_BINS)
        .range(range)
        .density(true)
        .call()?;

    println!("{:>8} | {:>8} | {:>8} | {:>8}", "y", "U^3", "YCube", "f(y)");
    for i in 0..NUM_BINS {
        let center: f64 = 0.5 * (hist_draws.edges[i] + hist_draws.edges[i + 1]);
        println!(
            "{center:>8.3} | {:>8.4} | {:>8.4} | {:>8.4}",
            hist_cubes.heights[i],
            hist_draws.heights[i],
            ycube.pdf(center)
        );
    }

    println!(
        "E[Y] = {:.4} (numerical), total probability = {:.4}",
        ycube.moment(1)?,
        ycube.total_probability()
    );

    return Ok(());
}
