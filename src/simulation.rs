//! Random-population demo: how similar are random samples drawn from one pool?
//!
//! A population of small random integers is shuffled repeatedly and the first
//! `sequence_length` values are taken as a sample each time. The symmetric
//! Tversky index is computed for every pair of samples and averaged.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::config::TverskyConfig;
use crate::similarity::tversky;

/// Parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Size of the pool samples are drawn from.
    pub population_size: usize,
    pub sequence_count: usize,
    pub sequence_length: usize,
    /// Population values are drawn uniformly from `0..=max_value`.
    pub max_value: u32,
    pub seed: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            population_size: 20,
            sequence_count: 100,
            sequence_length: 10,
            max_value: 20,
            seed: 42,
        }
    }
}

/// Mean of the non-NaN values, NaN if there are none.
pub fn nan_mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    sum / count as f64
}

/// Draws the random samples.
pub fn generate_sequences(params: &SimulationParams, rng: &mut StdRng) -> Vec<Vec<u32>> {
    let mut population: Vec<u32> = (0..params.population_size)
        .map(|_| rng.gen_range(0..=params.max_value))
        .collect();
    let take = params.sequence_length.min(population.len());
    (0..params.sequence_count)
        .map(|_| {
            population.shuffle(rng);
            population[..take].to_vec()
        })
        .collect()
}

/// Pairwise index matrix. The diagonal is NaN so it drops out of [`nan_mean`].
pub fn index_matrix(sequences: &[Vec<u32>], config: &TverskyConfig) -> Vec<Vec<f64>> {
    let n = sequences.len();
    let mut indices = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let index = tversky(&sequences[i], &sequences[j], config);
            indices[i][j] = index;
            indices[j][i] = index;
        }
    }
    indices
}

/// Runs the simulation and returns the mean index over all sample pairs.
pub fn simulate(params: &SimulationParams, config: &TverskyConfig) -> f64 {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let sequences = generate_sequences(params, &mut rng);
    let indices = index_matrix(&sequences, config);
    let row_means: Vec<f64> = indices.iter().map(|row| nan_mean(row)).collect();
    let mean = nan_mean(&row_means);
    debug!(
        sequences = sequences.len(),
        mean, "finished pairwise index simulation"
    );
    mean
}

// --------------------------------------------------
// Tests for the simulation helpers
#[cfg(test)]
mod simulation_tests {
    use crate::config::TverskyConfig;
    use crate::simulation::{generate_sequences, index_matrix, nan_mean, simulate, SimulationParams};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_nan_mean() {
        assert_eq!(2.0, nan_mean(&[1.0, f64::NAN, 3.0]));
        assert!(nan_mean(&[f64::NAN]).is_nan());
        assert!(nan_mean(&[]).is_nan());
    }

    #[test]
    fn test_generate_sequences_shape() {
        let params = SimulationParams {
            sequence_count: 5,
            sequence_length: 4,
            ..SimulationParams::default()
        };
        let mut rng = StdRng::seed_from_u64(params.seed);
        let sequences = generate_sequences(&params, &mut rng);
        assert_eq!(5, sequences.len());
        for sequence in &sequences {
            assert_eq!(4, sequence.len());
            assert!(sequence.iter().all(|value| *value <= params.max_value));
        }
    }

    #[test]
    fn test_index_matrix_is_symmetric() {
        let sequences = vec![vec![1, 2, 3], vec![2, 3, 4], vec![5]];
        let config = TverskyConfig::default().with_symmetric(true);
        let indices = index_matrix(&sequences, &config);
        assert!(indices[0][0].is_nan());
        assert_eq!(indices[0][1], indices[1][0]);
        assert_eq!(0.0, indices[0][2]);
    }

    #[test]
    fn test_whole_population_samples_are_identical() {
        let params = SimulationParams {
            sequence_count: 10,
            sequence_length: 20,
            ..SimulationParams::default()
        };
        let config = TverskyConfig::default().with_symmetric(true);
        assert_eq!(1.0, simulate(&params, &config));
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let params = SimulationParams::default();
        let config = TverskyConfig::default().with_symmetric(true);
        let mean = simulate(&params, &config);
        assert_eq!(mean, simulate(&params, &config));
        assert!((0.0..=1.0).contains(&mean));
    }
}
