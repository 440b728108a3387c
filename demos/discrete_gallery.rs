//! Prints the six pmfs of the discrete gallery as `(k, P(X = k))` rows.

use ProbabilityLaws::{errors::DistrError, gallery};

fn main() -> Result<(), DistrError> {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }

    for named in gallery::discrete_gallery()? {
        println!(
            "== {} == (mean {:.4}, variance {:.4}, mode {})",
            named.title,
            named.law.expected_value(),
            named.law.variance(),
            named.law.mode()
        );
        for (k, p) in named.law.iter() {
            println!("{k:>4} {p:.6}");
        }
        println!();
    }

    return Ok(());
}
