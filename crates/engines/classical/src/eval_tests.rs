use super::*;
use ttt_core::reachable_positions;

fn grid(s: &str) -> Grid {
    s.parse().unwrap()
}

#[test]
fn test_empty_grid_is_level() {
    assert_eq!(OpenLines.evaluate(&Grid::empty(), Mark::X), 0);
    assert_eq!(LineCount.evaluate(&Grid::empty(), Mark::O), 0);
}

#[test]
fn test_center_opens_four_lines() {
    let g = grid("... .X. ...");
    assert_eq!(OpenLines.evaluate(&g, Mark::X), 4);
    assert_eq!(OpenLines.evaluate(&g, Mark::O), -4);

    let corner = grid("X.. ... ...");
    assert_eq!(OpenLines.evaluate(&corner, Mark::X), 3);
    let edge = grid(".X. ... ...");
    assert_eq!(OpenLines.evaluate(&edge, Mark::X), 2);
}

#[test]
fn test_threats_outweigh_open_lines() {
    // Row 0 threatens for X, row 1 for O, O also holds the anti diagonal alone.
    let g = grid("XX. OO. ...");
    assert_eq!(OpenLines.evaluate(&g, Mark::X), 10 - 10 - 1);
    assert_eq!(OpenLines.evaluate(&g, Mark::O), 1);
}

#[test]
fn test_completed_line_scores_nothing_in_open_lines() {
    let g = grid("XXX OO. ...");
    // Row 0 is full, column 2 is X-only with two open cells, row 1 threatens for O.
    assert_eq!(OpenLines.evaluate(&g, Mark::X), 1 - 10);
    // Line count still credits the full row.
    assert_eq!(LineCount.evaluate(&g, Mark::X), 1);
}

#[test]
fn test_line_count_ignores_open_cells() {
    let g = grid("XX. OO. ...");
    assert_eq!(LineCount.evaluate(&g, Mark::X), 1 - 2);
    assert_eq!(LineCount.evaluate(&g, Mark::O), 2 - 1);
}

#[test]
fn test_evaluators_are_antisymmetric_and_bounded() {
    for g in reachable_positions() {
        let x = OpenLines.evaluate(&g, Mark::X);
        assert_eq!(x, -OpenLines.evaluate(&g, Mark::O), "{}", g.to_compact());
        assert!((-80..=80).contains(&x), "{} scored {}", g.to_compact(), x);

        let lc = LineCount.evaluate(&g, Mark::X);
        assert_eq!(lc, -LineCount.evaluate(&g, Mark::O));
        assert!((-8..=8).contains(&lc));
    }
}
