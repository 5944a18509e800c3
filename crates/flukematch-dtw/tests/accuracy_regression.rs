//! Accuracy regression tests for flukematch-dtw.
//!
//! These tests pin the banded fill to a naive reference recurrence and check
//! the structural properties of the accumulated-cost matrix on seeded random
//! inputs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use flukematch_dtw::{
    BandWindow, Boundary, CostMatrix, FeatureSequence, WarpingPath, WeightedDtw, Weights,
    weighted_euclidean, weighted_euclidean_cost,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Case {
    a: FeatureSequence,
    b: FeatureSequence,
    w: Vec<f32>,
}

fn random_case(rng: &mut ChaCha8Rng, m: usize, n: usize) -> Case {
    let mut values = |len: usize| -> Vec<f32> { (0..len).map(|_| rng.gen_range(-2.0f32..2.0)).collect() };
    let a = FeatureSequence::new(values(m * n), m, n).expect("valid test sequence");
    let b = FeatureSequence::new(values(m * n), m, n).expect("valid test sequence");
    let w = (0..m).map(|_| rng.gen_range(0.25f32..2.0)).collect();
    Case { a, b, w }
}

fn compute(case: &Case, radius: usize, boundary: &Boundary) -> CostMatrix {
    WeightedDtw::with_radius(radius)
        .compute(
            case.a.as_view(),
            case.b.as_view(),
            Weights::new(&case.w).expect("non-empty weights"),
            boundary,
        )
        .expect("consistent shapes")
}

/// Straightforward full-matrix recurrence with the band checked per cell.
fn reference(case: &Case, radius: usize) -> Vec<f32> {
    let m = case.a.rows();
    let mut c = vec![f32::INFINITY; m * m];
    c[0] = 0.0;
    for i in 1..m {
        for j in 1..m {
            let in_band = j + radius >= i && j < i + radius;
            if !in_band {
                continue;
            }
            let d = case
                .a
                .row(i)
                .iter()
                .zip(case.b.row(j))
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt();
            let local = case.w[i] * case.w[j] * d;
            let left = c[i * m + j - 1];
            let above = c[(i - 1) * m + j];
            let diag = c[(i - 1) * m + j - 1];
            let best = if diag < above { diag } else { above };
            let best = if best < left { best } else { left };
            c[i * m + j] = local + best;
        }
    }
    c
}

// ---------------------------------------------------------------------------
// a) fill_matches_reference_recurrence
// ---------------------------------------------------------------------------

#[test]
fn fill_matches_reference_recurrence() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for &(m, n) in &[(2, 1), (5, 3), (12, 1), (20, 4)] {
        let case = random_case(&mut rng, m, n);
        for radius in [0, 1, 2, 5, m, m + 3] {
            let filled = compute(&case, radius, &Boundary::standard());
            assert_eq!(
                filled.as_slice(),
                reference(&case, radius).as_slice(),
                "m={m} n={n} radius={radius}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// b) raw_entry_point_matches_builder
// ---------------------------------------------------------------------------

#[test]
fn raw_entry_point_matches_builder() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let (m, n, radius) = (9, 2, 3);
    let case = random_case(&mut rng, m, n);

    let mut raw = vec![0.0f32; m * m];
    {
        let mut view = flukematch_dtw::CostMatrixViewMut::new(&mut raw, m).expect("m*m buffer");
        Boundary::standard().apply(&mut view).expect("standard boundary");
    }
    let x1 = case.a.clone().into_inner();
    let x2 = case.b.clone().into_inner();
    weighted_euclidean(&x1, &x2, &case.w, m, n, radius, &mut raw).expect("consistent shapes");

    let built = compute(&case, radius, &Boundary::standard());
    assert_eq!(raw.as_slice(), built.as_slice());
}

// ---------------------------------------------------------------------------
// c) band_cells_finite_and_non_negative
// ---------------------------------------------------------------------------

#[test]
fn band_cells_finite_and_non_negative() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let boundaries = [Boundary::standard(), Boundary::standard().with_sentinel(1e9)];
    for &(m, n) in &[(6, 1), (15, 3)] {
        let case = random_case(&mut rng, m, n);
        for radius in 1..=m {
            let window = BandWindow::new(radius);
            for boundary in &boundaries {
                let c = compute(&case, radius, boundary);
                for i in 1..m {
                    for j in window.column_range(i, m) {
                        let v = c[(i, j)];
                        assert!(v.is_finite(), "C({i},{j}) = {v} with radius {radius}");
                        assert!(v >= 0.0, "C({i},{j}) = {v} with radius {radius}");
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// d) widening_band_never_increases_cost
// ---------------------------------------------------------------------------

#[test]
fn widening_band_never_increases_cost() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let m = 14;
    let case = random_case(&mut rng, m, 2);
    for narrow in 1..m {
        let wide = narrow + 1;
        let c_narrow = compute(&case, narrow, &Boundary::standard());
        let c_wide = compute(&case, wide, &Boundary::standard());
        let window = BandWindow::new(narrow);
        for i in 1..m {
            for j in window.column_range(i, m) {
                assert!(
                    c_wide[(i, j)] <= c_narrow[(i, j)],
                    "C({i},{j}) rose from {} to {} widening {narrow} -> {wide}",
                    c_narrow[(i, j)],
                    c_wide[(i, j)]
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// e) identical_sequences_have_zero_diagonal
// ---------------------------------------------------------------------------

#[test]
fn identical_sequences_have_zero_diagonal() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let m = 10;
    let mut case = random_case(&mut rng, m, 3);
    case.b = case.a.clone();
    case.w = vec![1.0; m];

    for radius in [1, 3, m] {
        let c = compute(&case, radius, &Boundary::standard());
        for i in 1..m {
            let predecessors = c[(i, i - 1)].min(c[(i - 1, i)].min(c[(i - 1, i - 1)]));
            assert_eq!(c[(i, i)], predecessors, "C({i},{i}) with radius {radius}");
            assert_eq!(c[(i, i)], 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// f) local_cost_symmetric_under_swap
// ---------------------------------------------------------------------------

#[test]
fn local_cost_symmetric_under_swap() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let m = 8;
    let case = random_case(&mut rng, m, 4);
    for i in 0..m {
        for j in 0..m {
            let forward = weighted_euclidean_cost(case.a.row(i), case.b.row(j), case.w[i], case.w[j]);
            let swapped = weighted_euclidean_cost(case.b.row(j), case.a.row(i), case.w[j], case.w[i]);
            assert_eq!(forward, swapped, "local cost ({i},{j})");
        }
    }
}

// ---------------------------------------------------------------------------
// g) concrete_three_step_scenario
// ---------------------------------------------------------------------------

#[test]
fn concrete_three_step_scenario() {
    let x = FeatureSequence::univariate(vec![0.0, 1.0, 2.0]).expect("valid sequence");
    let w = [1.0; 3];
    let c = WeightedDtw::with_radius(3)
        .compute(
            x.as_view(),
            x.as_view(),
            Weights::new(&w).expect("non-empty"),
            &Boundary::standard().with_sentinel(1e9),
        )
        .expect("consistent shapes");

    assert_eq!(c[(1, 1)], 0.0);
    assert_eq!(c[(1, 2)], 1.0);
    assert_eq!(c[(2, 1)], 1.0);
    assert_eq!(c[(2, 2)], 0.0);
    assert_eq!(c.final_cost().value(), 0.0);
}

// ---------------------------------------------------------------------------
// h) radius_beyond_length_matches_radius_at_length
// ---------------------------------------------------------------------------

#[test]
fn radius_beyond_length_matches_radius_at_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let m = 11;
    let case = random_case(&mut rng, m, 2);
    let at_length = compute(&case, m, &Boundary::standard());
    for radius in [m + 1, 2 * m, 1000] {
        assert_eq!(compute(&case, radius, &Boundary::standard()), at_length, "radius {radius}");
    }
}

// ---------------------------------------------------------------------------
// i) traceback_sums_to_final_cost
// ---------------------------------------------------------------------------

#[test]
fn traceback_sums_to_final_cost() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let m = 16;
    let case = random_case(&mut rng, m, 3);
    for radius in [2, 4, m] {
        let c = compute(&case, radius, &Boundary::standard());
        let path = WarpingPath::traceback(&c).expect("band connects origin to final cell");

        let mut acc = 0.0f32;
        for step in &path {
            let local = weighted_euclidean_cost(
                case.a.row(step.a),
                case.b.row(step.b),
                case.w[step.a],
                case.w[step.b],
            );
            acc = local + acc;
        }
        let expected = c.final_cost().value();
        assert!(
            (acc - expected).abs() <= 1e-4 * expected.max(1.0),
            "radius {radius}: path sum {acc} != final cost {expected}"
        );
    }
}
