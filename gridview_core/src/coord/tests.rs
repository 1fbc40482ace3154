use super::{cell_offset, round_down, round_up};

#[test]
fn round_up_positive() {
    assert_eq!(round_up(801, 100), 900);
    assert_eq!(round_up(1, 100), 100);
    assert_eq!(round_up(99, 10), 100);
}

#[test]
fn round_down_positive() {
    assert_eq!(round_down(899, 100), 800);
    assert_eq!(round_down(1, 100), 0);
}

#[test]
fn negative_values_round_away_from_content() {
    assert_eq!(round_down(-201, 100), -300);
    assert_eq!(round_down(-200, 100), -200);
    assert_eq!(round_up(-201, 100), -200);
    assert_eq!(round_up(-299, 100), -200);
    assert_eq!(round_down(-1, 100), -100);
    assert_eq!(round_up(-1, 100), 0);
}

#[test]
fn exact_multiples_are_fixed_points() {
    for n in [-1000, -100, 0, 100, 1200] {
        assert_eq!(round_up(n, 100), n);
        assert_eq!(round_down(n, 100), n);
    }
}

#[test]
fn bracketing_contract_holds_over_a_range() {
    for unit in [1, 3, 10, 100, 128] {
        for n in -1000..=1000 {
            let lo = round_down(n, unit);
            let hi = round_up(n, unit);
            assert!(lo <= n && n <= hi, "n={n} unit={unit} lo={lo} hi={hi}");
            assert_eq!(lo % unit, 0);
            assert_eq!(hi % unit, 0);
            assert!(hi - lo < 2 * unit);
        }
    }
}

#[test]
fn unit_of_one_is_identity() {
    assert_eq!(round_up(-37, 1), -37);
    assert_eq!(round_down(42, 1), 42);
}

#[test]
fn cell_offset_is_non_negative() {
    assert_eq!(cell_offset(250, 100), 50);
    assert_eq!(cell_offset(-250, 100), 50);
    assert_eq!(cell_offset(-100, 100), 0);
}

#[test]
fn extremes_saturate_to_representable_multiples() {
    let top = round_up(i32::MAX - 5, 100);
    assert_eq!(top % 100, 0);
    assert!(top > i32::MAX - 100);

    let bottom = round_down(i32::MIN + 5, 100);
    assert_eq!(bottom % 100, 0);
    assert!(bottom < i32::MIN + 100);
}
