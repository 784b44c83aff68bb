use ghd::{compute_ghd, CostParameters};
use proptest::prelude::*;

/// Straightforward nested-vector tableau, written directly against the bits.
fn reference_ghd(s: &[u8], t: &[u8], ci: f64, cd: f64, a: f64) -> f64 {
    let positions = |bits: &[u8]| -> Vec<usize> {
        let set: Vec<usize> = (0..bits.len()).filter(|&i| bits[i] == 1).map(|i| i + 1).collect();
        if set.is_empty() {
            set
        } else {
            std::iter::once(0).chain(set).collect()
        }
    };
    let rv = positions(s);
    let cv = positions(t);
    let (nrows, ncols) = (rv.len(), cv.len());

    if nrows == 0 && ncols == 0 {
        return 0.0;
    }
    if ncols == 0 {
        return (nrows - 1) as f64 * ci;
    }
    if nrows == 0 {
        return (ncols - 1) as f64 * cd;
    }

    let mut dp = vec![vec![0.0f64; ncols]; nrows];
    for j in 0..ncols {
        dp[0][j] = j as f64 * ci;
    }
    for i in 0..nrows {
        dp[i][0] = i as f64 * cd;
    }
    for i in 1..nrows {
        for j in 1..ncols {
            let (ri, cj) = (rv[i], cv[j]);
            let shift = a * (ri as f64 - cj as f64).abs() + dp[i - 1][j - 1];
            dp[i][j] = if ri == cj {
                dp[i - 1][j - 1]
            } else if ri > cj {
                let del = cd + dp[i - 1][j];
                if del < shift {
                    del
                } else {
                    shift
                }
            } else {
                let ins = ci + dp[i][j - 1];
                if ins < shift {
                    ins
                } else {
                    shift
                }
            };
        }
    }
    dp[nrows - 1][ncols - 1]
}

fn bit_pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0..=max_len).prop_flat_map(|n| {
        (
            proptest::collection::vec(0u8..2, n),
            proptest::collection::vec(0u8..2, n),
        )
    })
}

#[test]
fn reference_agrees_on_fixed_scenarios() {
    assert_eq!(reference_ghd(&[0, 1, 1], &[1, 1, 0], 1.0, 1.0, 0.5), 1.0);
    assert_eq!(reference_ghd(&[0, 0, 0], &[1, 1, 1], 1.0, 2.0, 0.5), 6.0);
}

proptest! {
    #[test]
    fn engine_matches_reference_tableau(
        (s, t) in bit_pair(24),
        ci in 0.0f64..10.0,
        cd in 0.0f64..10.0,
        a in 0.0f64..5.0,
    ) {
        let costs = CostParameters::new(ci, cd, a).unwrap();
        let got = compute_ghd(&s, &t, s.len(), &costs).unwrap();
        prop_assert_eq!(got, reference_ghd(&s, &t, ci, cd, a));
    }

    #[test]
    fn sparse_long_vectors_match_reference(
        bits in proptest::collection::vec(prop::bool::weighted(0.05), 400),
        other in proptest::collection::vec(prop::bool::weighted(0.05), 400),
        a in 0.0f64..2.0,
    ) {
        let s: Vec<u8> = bits.iter().map(|&b| b as u8).collect();
        let t: Vec<u8> = other.iter().map(|&b| b as u8).collect();
        let costs = CostParameters::new(1.0, 1.0, a).unwrap();
        let got = compute_ghd(&s, &t, 400, &costs).unwrap();
        prop_assert_eq!(got, reference_ghd(&s, &t, 1.0, 1.0, a));
    }
}
