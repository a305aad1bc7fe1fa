//! Synthetic admissions data with a known logistic data-generating process

use super::record::{AdmissionRecord, Dataset, Gender};
use crate::glm::sigmoid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// True coefficients of the simulated process, on centred predictors
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub intercept: f64,
    pub gre_v: f64,
    pub gre_q: f64,
    pub gre_w: f64,
    pub gpa: f64,
    pub male: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            intercept: -0.8,
            gre_v: 0.04,
            gre_q: 0.06,
            gre_w: 0.3,
            gpa: 1.5,
            male: 0.1,
        }
    }
}

/// Box-Muller standard normal draw
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn gre_score(rng: &mut StdRng, mean: f64) -> i32 {
    (mean + 8.0 * standard_normal(rng)).round().clamp(130.0, 170.0) as i32
}

/// Generate `n` applicants with the default parameters
pub fn simulate(n: usize, seed: u64) -> Dataset {
    simulate_with(n, seed, &SimulationParams::default())
}

/// Generate `n` applicants whose admission follows `params`
pub fn simulate_with(n: usize, seed: u64, params: &SimulationParams) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let gre_v = gre_score(&mut rng, 152.0);
            let gre_q = gre_score(&mut rng, 154.0 + 0.3 * f64::from(gre_v - 152));
            let gre_w = ((3.8 + 0.8 * standard_normal(&mut rng)) * 2.0).round().clamp(0.0, 12.0) / 2.0;
            let gpa = ((3.3 + 0.4 * standard_normal(&mut rng)).clamp(0.0, 4.0) * 100.0).round() / 100.0;
            let gender = if rng.random_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            };

            let male = if gender == Gender::Male { 1.0 } else { 0.0 };
            let eta = params.intercept
                + params.gre_v * f64::from(gre_v - 152)
                + params.gre_q * f64::from(gre_q - 154)
                + params.gre_w * (gre_w - 3.8)
                + params.gpa * (gpa - 3.3)
                + params.male * male;
            let admit = u8::from(rng.random_bool(sigmoid(eta)));

            AdmissionRecord {
                admit,
                gre_v,
                gre_q,
                gre_w,
                gpa,
                gender,
            }
        })
        .collect()
}
