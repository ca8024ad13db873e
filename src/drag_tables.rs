//! Embedded reference drag tables.
//!
//! Mach -> Cd data for the G1, G7, and G8 standard projectiles, condensed
//! from the public McCoy/BRL tabulations. Each table is constructed once
//! behind a `Lazy` and shared read-only across solves; lookup and
//! interpolation live in [`crate::drag`].

use once_cell::sync::Lazy;

use crate::drag::DragTable;

/// G1 standard projectile (flat-base, blunt ogive)
pub(crate) static G1_TABLE: Lazy<DragTable> = Lazy::new(|| {
    DragTable::from_pairs(&[
        (0.0, 0.2629),
        (0.5, 0.2695),
        (0.6, 0.2752),
        (0.7, 0.2817),
        (0.8, 0.2902),
        (0.9, 0.3012),
        (1.0, 0.4805),
        (1.1, 0.5933),
        (1.2, 0.6318),
        (1.3, 0.6440),
        (1.4, 0.6444),
        (1.5, 0.6372),
        (1.6, 0.6252),
        (1.7, 0.6105),
        (1.8, 0.5956),
        (1.9, 0.5815),
        (2.0, 0.5934),
        (2.5, 0.5598),
        (3.0, 0.5133),
        (4.0, 0.4811),
        (5.0, 0.4988),
    ])
});

/// G7 standard projectile (boat-tail, long secant ogive)
pub(crate) static G7_TABLE: Lazy<DragTable> = Lazy::new(|| {
    DragTable::from_pairs(&[
        (0.0, 0.1198),
        (0.5, 0.1197),
        (0.6, 0.1202),
        (0.7, 0.1213),
        (0.8, 0.1240),
        (0.9, 0.1294),
        (1.0, 0.3803),
        (1.1, 0.4015),
        (1.2, 0.4043),
        (1.3, 0.3956),
        (1.4, 0.3814),
        (1.5, 0.3663),
        (1.6, 0.3520),
        (1.7, 0.3398),
        (1.8, 0.3297),
        (1.9, 0.3221),
        (2.0, 0.2980),
        (2.5, 0.2731),
        (3.0, 0.2424),
        (4.0, 0.2196),
        (5.0, 0.1618),
    ])
});

/// G8 standard projectile (flat-base, 10-caliber secant ogive)
pub(crate) static G8_TABLE: Lazy<DragTable> = Lazy::new(|| {
    DragTable::from_pairs(&[
        (0.0, 0.2105),
        (0.5, 0.2105),
        (0.6, 0.2109),
        (0.7, 0.2120),
        (0.8, 0.2155),
        (0.9, 0.2271),
        (1.0, 0.2933),
        (1.1, 0.3635),
        (1.2, 0.3860),
        (1.3, 0.3918),
        (1.4, 0.3889),
        (1.5, 0.3810),
        (1.6, 0.3732),
        (1.7, 0.3636),
        (1.8, 0.3542),
        (1.9, 0.3453),
        (2.0, 0.3369),
        (2.5, 0.2989),
        (3.0, 0.2683),
        (4.0, 0.2297),
        (5.0, 0.2037),
    ])
});
