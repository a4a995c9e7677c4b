use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use traversals::shuffled;

const LEN: usize = 8;
const TRIALS: usize = 8_000;

// chi-squared with 7 degrees of freedom; p < 1e-6 beyond this
const CRITICAL: f64 = 40.0;

fn chi_squared(counts: &[usize]) -> f64 {
    let expected = TRIALS as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn first_visited_index_is_unbiased() {
    let data: Vec<usize> = (0..LEN).collect();
    let mut counts = [0usize; LEN];

    for seed in 0..TRIALS as u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let view = shuffled(data.as_slice(), &mut rng);
        let first = *view.iter().next().expect("non-empty view");
        counts[first] += 1;
    }

    let stat = chi_squared(&counts);
    assert!(stat < CRITICAL, "first index biased: chi2={stat:.2} counts={counts:?}");
}

#[test]
fn every_slot_sees_every_index() {
    let data: Vec<usize> = (0..LEN).collect();
    let mut seen = [[false; LEN]; LEN];
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..2_000 {
        let view = shuffled(data.as_slice(), &mut rng);
        for (slot, &index) in view.iter().enumerate() {
            seen[slot][index] = true;
        }
    }

    assert!(seen.iter().flatten().all(|&hit| hit));
}
