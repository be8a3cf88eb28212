//! Largest-remainder allocation of a fixed icon budget.

/// Split `budget` icons across shares given in percent.
///
/// Each share first receives `floor(p * budget / 100)`. The icons still
/// missing are then handed out one at a time, walking the shares ordered by
/// fractional remainder (largest first, ties in input order) and wrapping
/// around when the walk passes the end. For shares summing to 100 the result
/// sums to exactly `budget`. Smaller sums keep their floors only, and sums
/// over 100 are not corrected.
pub fn allocate(percentages: &[f64], budget: u32) -> Vec<u32> {
    if percentages.is_empty() {
        return Vec::new();
    }

    let exact: Vec<f64> = percentages
        .iter()
        .map(|p| p.max(0.0) * f64::from(budget) / 100.0)
        .collect();
    let mut counts: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();

    let total_share: f64 = percentages.iter().map(|p| p.max(0.0)).sum();
    let assigned: u32 = counts.iter().sum();
    let mut deficit = if total_share >= 100.0 - 1e-6 {
        budget.saturating_sub(assigned)
    } else {
        0
    };

    let mut order: Vec<usize> = (0..exact.len()).collect();
    // `sort_by` is stable, so equal remainders keep their input order.
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });

    let mut cursor = 0;
    while deficit > 0 {
        counts[order[cursor]] += 1;
        deficit -= 1;
        cursor = (cursor + 1) % order.len();
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_shares_need_no_remainder_pass() {
        assert_eq!(allocate(&[50.0, 30.0, 20.0], 200), vec![100, 60, 40]);
    }

    #[test]
    fn complete_shares_always_hit_the_budget() {
        let cases: [&[f64]; 4] = [
            &[33.3, 33.3, 33.4],
            &[12.5, 12.5, 25.0, 50.0],
            &[14.3, 14.3, 14.3, 14.3, 14.3, 14.2, 14.3],
            &[100.0],
        ];
        for shares in cases {
            let counts = allocate(shares, 200);
            assert_eq!(counts.iter().sum::<u32>(), 200, "shares {shares:?}");
        }
    }

    #[test]
    fn largest_remainder_wins_and_ties_keep_input_order() {
        // exact: 66.6 / 66.6 / 66.8 -> floors 66/66/66, deficit 2
        assert_eq!(allocate(&[33.3, 33.3, 33.4], 200), vec![67, 66, 67]);
        // exact: 0.5 each -> floors 0, two icons owed, handed to the first two
        assert_eq!(allocate(&[25.0, 25.0, 25.0, 25.0], 2), vec![1, 1, 0, 0]);
    }

    #[test]
    fn incomplete_shares_only_receive_floors() {
        let counts = allocate(&[40.25, 30.25], 200);
        assert_eq!(counts, vec![80, 60]);
    }

    #[test]
    fn allocation_is_deterministic() {
        let shares = [20.1, 19.9, 30.05, 29.95];
        assert_eq!(allocate(&shares, 200), allocate(&shares, 200));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(allocate(&[], 200).is_empty());
    }
}
