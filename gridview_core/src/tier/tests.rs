use super::{GeometryError, GridTier, LabelTier, TierSet, TierUnits};

#[test]
fn default_units_are_one_ten_hundred() {
    let units = TierUnits::default();
    assert_eq!(units.unit(GridTier::Fine), 1);
    assert_eq!(units.unit(GridTier::Medium), 10);
    assert_eq!(units.unit(GridTier::Coarse), 100);
    assert_eq!(units.double_coarse(), 200);
    assert!(units.validate().is_ok());
}

#[test]
fn rejects_non_positive_unit() {
    assert_eq!(
        TierUnits::new(0, 10, 100),
        Err(GeometryError::NonPositiveUnit(0))
    );
    assert_eq!(
        TierUnits::new(1, 10, -100),
        Err(GeometryError::NonPositiveUnit(-100))
    );
}

#[test]
fn rejects_descending_units() {
    assert_eq!(
        TierUnits::new(10, 1, 100),
        Err(GeometryError::NotAscending {
            finer: 10,
            coarser: 1
        })
    );
}

#[test]
fn rejects_units_that_do_not_nest() {
    assert_eq!(
        TierUnits::new(1, 30, 100),
        Err(GeometryError::NotDivisible {
            finer: 30,
            coarser: 100
        })
    );
}

#[test]
fn accepts_other_nesting_units() {
    let units = TierUnits::new(2, 16, 128).expect("valid units");
    assert_eq!(units.coarse, 128);
}

#[test]
fn tier_names_match_layer_names() {
    assert_eq!(GridTier::Fine.name(), "lines.1");
    assert_eq!(GridTier::Medium.name(), "lines.10");
    assert_eq!(GridTier::Coarse.name(), "lines.100");
    assert_eq!(LabelTier::Coarse.name(), "text.100");
    assert_eq!(LabelTier::DoubleCoarse.name(), "text.200");
}

#[test]
fn tier_flags_are_distinct() {
    let all = GridTier::ALL
        .iter()
        .fold(TierSet::empty(), |acc, t| acc | t.flag());
    assert_eq!(all, TierSet::all());
    for (i, tier) in GridTier::ALL.iter().enumerate() {
        assert_eq!(tier.index(), i);
    }
}

#[test]
fn coarser_tiers_listed_for_exclusion() {
    assert_eq!(GridTier::Fine.coarser(), &[GridTier::Medium, GridTier::Coarse]);
    assert_eq!(GridTier::Medium.coarser(), &[GridTier::Coarse]);
    assert!(GridTier::Coarse.coarser().is_empty());
}
