//! Statistical scaling properties of the supported primitives.
//!
//! These assert trends in aggregate, with enough samples and wide enough
//! work-factor gaps to clear timer and scheduler noise on a loaded CI
//! machine. They are slower than the harness suite.

use hashbench::{Algorithm, Config, Sampler};

#[test]
fn bcrypt_cost_increase_raises_mean_elapsed_time() {
    // Cost is logarithmic: three increments are 8x the work, far beyond
    // anything scheduler jitter can mask at millisecond scale.
    let sampler = Sampler::new(Config::new().samples(6));
    let unit = Algorithm::Bcrypt.work_unit();

    let table = sampler.run(&unit, &[4, 7]).unwrap();

    let low = table.get(4).unwrap();
    let high = table.get(7).unwrap();
    assert!(
        high > low,
        "cost 7 mean ({high:.6}s) should exceed cost 4 mean ({low:.6}s)"
    );
}

#[test]
fn pbkdf2_mean_scales_roughly_linearly_with_iterations() {
    let sampler = Sampler::new(Config::new().samples(8));
    let unit = Algorithm::Pbkdf2Sha256.work_unit();

    let table = sampler.run(&unit, &[25_000, 100_000]).unwrap();

    let low = table.get(25_000).unwrap();
    let high = table.get(100_000).unwrap();
    let ratio = high / low;

    // 4x the iterations should take about 4x as long. The band is generous
    // because short derivations carry fixed per-call overhead and CI
    // machines are noisy.
    assert!(
        (2.0..=8.0).contains(&ratio),
        "100k/25k iteration mean ratio {ratio:.2} outside the expected band"
    );
}
