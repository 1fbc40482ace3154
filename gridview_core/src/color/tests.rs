use super::{AlphaScales, Rgba, TierPalette};
use crate::tier::GridTier;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn finer_tiers_are_fainter() {
    let grid = Rgba::new(0.2, 0.4, 0.6, 0.8);
    let palette = TierPalette::resolve(grid, Rgba::WHITE, AlphaScales::default());
    assert!(approx(palette.fine.a, 0.08));
    assert!(approx(palette.medium.a, 0.24));
    assert!(approx(palette.coarse.a, 0.8));
    assert!(palette.stroke(GridTier::Fine).a < palette.stroke(GridTier::Medium).a);
    assert!(palette.stroke(GridTier::Medium).a < palette.stroke(GridTier::Coarse).a);
}

#[test]
fn hue_is_preserved_across_tiers() {
    let grid = Rgba::new(0.9, 0.1, 0.3, 1.0);
    let palette = TierPalette::resolve(grid, Rgba::BLACK, AlphaScales::default());
    for tier in GridTier::ALL {
        let c = palette.stroke(tier);
        assert_eq!((c.r, c.g, c.b), (0.9, 0.1, 0.3));
    }
}

#[test]
fn text_uses_full_base_color_and_background() {
    let grid = Rgba::new(0.0, 0.0, 1.0, 0.5);
    let bg = Rgba::new(1.0, 1.0, 0.9, 1.0);
    let palette = TierPalette::resolve(grid, bg, AlphaScales::default());
    assert_eq!(palette.text, grid);
    assert_eq!(palette.label_background, bg);
}

#[test]
fn fine_scale_is_kept_in_band() {
    let too_faint = AlphaScales {
        fine: 0.01,
        ..AlphaScales::default()
    };
    assert!(approx(too_faint.effective_fine(), 0.1));
    let too_strong = AlphaScales {
        fine: 0.9,
        ..AlphaScales::default()
    };
    assert!(approx(too_strong.effective_fine(), 0.2));
}

#[test]
fn out_of_range_components_are_clamped() {
    let c = Rgba::new(1.5, -0.2, f32::NAN, 2.0).clamped();
    assert_eq!(c, Rgba::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn array_conversion_round_trips_components() {
    let c: Rgba = [0.1, 0.2, 0.3, 0.4].into();
    assert_eq!(c, Rgba::new(0.1, 0.2, 0.3, 0.4));
    let arr: [f32; 4] = c.into();
    assert_eq!(arr, [0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn resolve_is_deterministic() {
    let grid = Rgba::new(0.3, 0.3, 0.3, 0.7);
    let a = TierPalette::resolve(grid, Rgba::WHITE, AlphaScales::default());
    let b = TierPalette::resolve(grid, Rgba::WHITE, AlphaScales::default());
    assert_eq!(a, b);
}

#[test]
fn coarse_ignores_alpha_scales() {
    let grid = Rgba::new(0.0, 0.0, 0.0, 0.6);
    let scales = AlphaScales {
        fine: 0.2,
        medium: 0.9,
    };
    let palette = TierPalette::resolve(grid, Rgba::WHITE, scales);
    assert_eq!(palette.coarse, grid);
}
