use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ProbabilityLaws::{
    Distribution,
    distributions::{ContinuousFamily, Gaussian::Gaussian, YCube::YCube},
    errors::DistrError,
    gallery::{self, NamedDiscreteLaw},
    histogram::{Histogram, histogram},
    samples::Samples,
};

#[test]
fn continuous_gallery_contents() {
    let laws: Vec<ContinuousFamily> = gallery::continuous_gallery().unwrap();
    let names: Vec<&str> = laws.iter().map(|d: &ContinuousFamily| d.name()).collect();
    assert_eq!(
        names,
        vec![
            "Uniform Continuous",
            "Exponential",
            "Gamma",
            "Weibull",
            "Gaussian",
            "Laplace"
        ]
    );

    // exponential with beta = 2
    assert_approx_eq!(laws[1].expected_value().unwrap(), 2.0, 1e-12);
    // gamma with alpha = 1, beta = 0.5
    assert_approx_eq!(laws[2].expected_value().unwrap(), 0.5, 1e-12);

    let mut rng: StdRng = StdRng::seed_from_u64(2022);
    for law in &laws {
        let samples: Vec<f64> = law.sample_multiple_with(1_000, &mut rng).unwrap();
        assert_eq!(samples.len(), 1_000);
        assert!(samples.iter().all(|&x| law.get_domain().contains(x)));
    }
}

#[test]
fn family_dispatch() {
    let inner: Gaussian = Gaussian::new(1.0, 2.0).unwrap();
    let family: ContinuousFamily = inner.clone().into();
    for x in [-3.0, 0.0, 1.0, 4.5] {
        assert_eq!(family.pdf(x), inner.pdf(x));
        assert_eq!(family.cdf(x), inner.cdf(x));
    }
    assert_eq!(family.variance(), Some(4.0));
    assert_eq!(family.get_domain(), inner.get_domain());
}

#[test]
fn ycube_gallery() {
    let law: ContinuousFamily = gallery::ycube();
    assert_eq!(law, ContinuousFamily::YCube(YCube::standard()));
    assert_eq!(law.name(), "YCube");
    assert_eq!(law.get_domain().get_bounds(), (0.0, 8.0));
}

#[test]
fn discrete_gallery_contents() {
    let laws: Vec<NamedDiscreteLaw> = gallery::discrete_gallery().unwrap();
    let titles: Vec<&str> = laws.iter().map(|l: &NamedDiscreteLaw| l.title).collect();
    assert_eq!(
        titles,
        vec![
            "Uniform Discrete",
            "Hypergeometric",
            "Binomial",
            "Poisson",
            "Geometric",
            "Negative Binomial"
        ]
    );

    let lengths: Vec<usize> = laws.iter().map(|l: &NamedDiscreteLaw| l.law.len()).collect();
    assert_eq!(lengths, vec![20, 10, 20, 50, 20, 40]);

    for named in &laws {
        let total: f64 = named.law.weights().iter().sum();
        assert_approx_eq!(total, 1.0, 1e-9);
    }
}

#[test]
fn histogram_counts() {
    let data: Vec<f64> = vec![0.0, 0.1, 0.2, 0.5, 0.9, 1.0, 2.0];
    let hist: Histogram = histogram()
        .samples(&data)
        .bins(4)
        .range((0.0, 1.0))
        .call()
        .unwrap();

    assert_eq!(hist.bins(), 4);
    assert_eq!(hist.edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    // 2.0 is out of range, 1.0 goes to the last bin
    assert_eq!(hist.heights, vec![3.0, 0.0, 1.0, 2.0]);
}

#[test]
fn histogram_density() {
    let d: Gaussian = Gaussian::standard();
    let mut rng: StdRng = StdRng::seed_from_u64(8);
    let data: Vec<f64> = d.sample_multiple_with(2_000, &mut rng).unwrap();

    let hist: Histogram = histogram().samples(&data).density(true).call().unwrap();
    assert_eq!(hist.bins(), 30);
    assert_approx_eq!(hist.area(), 1.0, 1e-9);
    assert_approx_eq!(hist.bin_width().unwrap(), (hist.edges[30] - hist.edges[0]) / 30.0, 1e-9);
    assert_eq!(hist.edges.first().copied(), data.iter().copied().reduce(f64::min));
    assert_eq!(hist.edges.last().copied(), data.iter().copied().reduce(f64::max));
}

#[test]
fn hand_built_histogram() {
    let empty: Histogram = Histogram {
        edges: vec![],
        heights: vec![],
    };
    assert_eq!(empty.bin_width(), None);
    assert_eq!(empty.area(), 0.0);

    let single_edge: Histogram = Histogram {
        edges: vec![1.0],
        heights: vec![],
    };
    assert_eq!(single_edge.bin_width(), None);

    let hist: Histogram = Histogram {
        edges: vec![0.0, 0.5, 1.0],
        heights: vec![1.0, 1.0],
    };
    assert_eq!(hist.bin_width(), Some(0.5));
    assert_eq!(hist.area(), 1.0);
}

#[test]
fn histogram_errors() {
    assert!(histogram().samples(&[]).call().is_err());
    assert!(histogram().samples(&[1.0]).bins(0).call().is_err());
    assert!(histogram().samples(&[1.0, f64::NAN]).call().is_err());
    assert!(
        histogram()
            .samples(&[1.0, 2.0])
            .range((2.0, 2.0))
            .call()
            .is_err()
    );

    // a single repeated value still gets a non-empty range
    let hist: Histogram = histogram().samples(&[3.0, 3.0]).bins(1).call().unwrap();
    assert_eq!(hist.edges, vec![2.5, 3.5]);
    assert_eq!(hist.heights, vec![2.0]);
}

#[test]
fn sample_statistics() {
    let mut samples: Samples = Samples::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(samples.count(), 4);
    assert_approx_eq!(samples.mean(), 2.5, 1e-12);
    assert_approx_eq!(samples.variance().unwrap(), 5.0 / 3.0, 1e-12);
    assert_approx_eq!(samples.raw_moment(2).unwrap(), 7.5, 1e-12);
    assert_eq!(samples.minimum(), 1.0);
    assert_eq!(samples.maximum(), 4.0);
    assert_eq!(samples.peek_properties().mean, Some(2.5));
    assert!(samples.raw_moment(0).is_err());

    let single: Samples = Samples::new(&[1.0]).unwrap();
    assert_eq!(single.count(), 1);

    let copy: Samples = samples.clone();
    assert_eq!(copy.peek_data(), samples.peek_data());
    assert_eq!(copy.peek_properties().mean, Some(2.5));
    assert!(format!("{copy:?}").contains("Samples"));

    let err: DistrError = Samples::new(&[]).err().unwrap();
    assert!(matches!(err, DistrError::InvalidParameter { name: "data", .. }));
    assert!(Samples::new(&[1.0, f64::INFINITY]).is_err());
}
