//! This file contains the deafult values and other value choices used trough the library.
//!

/// The library uses numerical integration for the moments, the deafult cdf and
/// the total probability of a density. In order to do this we have decided to use
/// the [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// to integrate. But even considering this, for a given integral we still need
/// to choose the step length or the number of steps.
///
/// For most intervals, we integrate using a step length of [DEFAULT_INTEGRATION_PRECISION],
/// however if the interval is too large (it would requiere more than [DEFAULT_INTEGRATION_MAXIMUM_STEPS]
/// to integrate), we will keep the number of steps fixed and just change the precision to not do more than
/// that many steps. In the other hand, if the interval is small ([SMALL_INTERVAL_LENGTH] or less),
/// we will just use [SMALL_INTEGRATION_NUM_STEPS] with the appropiate precision.
/// We will also make sure that if we are using the [DEFAULT_INTEGRATION_PRECISION], we do
/// at least [DEFAULT_INTEGRATION_MINIMUM_STEPS] (and adapt the precision if needed).
///
/// Finite intervals are split in 2 halves and each half is mapped to `[0, 1]` with
/// a change of variable that flattens the ends (see [crate::euclid::finite_integration]),
/// but the number of steps is still chosen from the length of the half.
///
/// Infinite intervals are mapped to `[0, 1]` or `[-1, 1]` with a change of variable
/// and are integrated as small intervals. On half-infinite intervals, the unit
/// interval next to the finite bound is integrated as a finite interval.
///
/// In order to choose the correct values, we use the [crate::euclid::choose_integration_precision_and_steps]
/// function.
pub mod integration {

    /// The deafult integration precision is `1/8`.
    pub static DEFAULT_INTEGRATION_PRECISION: f64 = 0.125;

    /// The maximum number of subdivisions of the domains to numerically integrate functions.
    /// `1 << 20 = 1 048 576`
    pub static DEFAULT_INTEGRATION_MAXIMUM_STEPS: usize = 1 << 20;

    /// The minimum number of subdivisions of the domains to numerically integrate functions.
    /// `1 << 12 = 4 096`
    pub static DEFAULT_INTEGRATION_MINIMUM_STEPS: usize = 1 << 12;

    /// The number of steps used to integrate among a small interval
    /// (such as `[0, 1]` or `[-1, 1]`). The value is relatively large because we want
    /// to make sure to capture the shape of the function in the small interval.
    ///
    /// `32768` = `2^15`
    pub static SMALL_INTEGRATION_NUM_STEPS: usize = 1 << 15;

    /// Intervals with a length smaller or equal to this are considered small.
    pub static SMALL_INTERVAL_LENGTH: f64 = 2.0;
}

/// Values used by the deafult sampler of [crate::distribution_trait::Distribution].
pub mod sampling {

    /// When the domain of a density is infinite, the default rejection sampler
    /// needs a finite range. It starts at the finite bound (or `0.0`) and keeps
    /// doubling the distance until the density falls below this value.
    pub static NEGLIGIBLE_DENSITY: f64 = 1.0e-10;

    /// Maximum number of doublings when searching for the effective range
    /// of an infinite domain. `2^64` is far beyond anything representable
    /// with meaningful precision.
    pub static MAX_RANGE_DOUBLINGS: u32 = 64;

    /// Number of points used to scan the density in order to estimate
    /// its maximum (the height of the rejection envelope).
    pub static PDF_MAX_GRID_POINTS: usize = (1 << 12) + 1;

    /// The estimated maximum of the density is multiplied by this value.
    /// The grid scan may miss the real peak by a little.
    pub static ENVELOPE_SAFETY_FACTOR: f64 = 1.1;

    /// Maximum number of rejected proposals for a single sample before the
    /// rejection sampler gives up.
    pub static MAX_REJECTION_ATTEMPTS: usize = 1 << 20;
}

/// Values used when building discrete laws.
pub mod discrete {

    /// If the raw weights of a truncated law sum to less than `1.0 - MASS_LOSS_WARNING`
    /// (or more than `1.0 + MASS_LOSS_WARNING`), a warning is logged before
    /// renormalizing.
    pub static MASS_LOSS_WARNING: f64 = 1.0e-3;
}

/// Values used by [crate::histogram::histogram].
pub mod histogram {

    /// Number of bins when the caller does not choose one.
    pub static DEFAULT_BIN_COUNT: usize = 30;
}
