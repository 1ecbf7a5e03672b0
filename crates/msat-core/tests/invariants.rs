// crates/msat-core/tests/invariants.rs

use msat_core::{Rect, SummedAreaTable};
use proptest::prelude::*;

fn brute_sum(data: &[u8], width: usize, height: usize, r: Rect) -> u64 {
    let mut acc = 0u64;
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            if x >= r.x0 && x <= r.x1 && y >= r.y0 && y <= r.y1 {
                acc += data[x as usize + y as usize * width] as u64;
            }
        }
    }
    acc
}

fn grid() -> impl Strategy<Value = (usize, usize, Vec<u8>)> {
    (1usize..=24, 1usize..=24).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(any::<u8>(), w * h),
        )
    })
}

proptest! {
    #[test]
    fn inside_rect_matches_brute_force_in_any_corner_order(
        (w, h, data) in grid(),
        a in (0usize..24, 0usize..24),
        b in (0usize..24, 0usize..24),
    ) {
        let t = SummedAreaTable::new(&data, w, h).unwrap();
        let (ax, ay) = ((a.0 % w) as i64, (a.1 % h) as i64);
        let (bx, by) = ((b.0 % w) as i64, (b.1 % h) as i64);

        let want = brute_sum(&data, w, h, Rect::new(ax, ay, bx, by).canonical());
        prop_assert_eq!(t.sum(ax, ay, bx, by), want);
        prop_assert_eq!(t.sum(bx, by, ax, ay), want);
        prop_assert_eq!(t.sum(ax, by, bx, ay), want);
        prop_assert_eq!(t.sum(bx, ay, ax, by), want);
    }

    #[test]
    fn partially_outside_rect_is_clamped(
        (w, h, data) in grid(),
        x0 in -40i64..40,
        y0 in -40i64..40,
        x1 in -40i64..40,
        y1 in -40i64..40,
    ) {
        let t = SummedAreaTable::new(&data, w, h).unwrap();
        // brute_sum only visits in-grid cells, so it clamps implicitly
        let want = brute_sum(&data, w, h, Rect::new(x0, y0, x1, y1).canonical());
        prop_assert_eq!(t.sum(x0, y0, x1, y1), want);

        let avg = t.average(x0, y0, x1, y1);
        match Rect::new(x0, y0, x1, y1).resolve(w, h) {
            Some(r) if want > 0 => {
                let expect = want as f64 / r.area() as f64;
                prop_assert!((avg - expect).abs() < 1e-9);
            }
            _ => {
                prop_assert_eq!(avg, 0.0);
            }
        }
    }

    #[test]
    fn past_far_edges_is_zero(
        (w, h, data) in grid(),
        dx in 0i64..10,
        dy in 0i64..10,
        y in -5i64..30,
    ) {
        let t = SummedAreaTable::new(&data, w, h).unwrap();
        let (w, h) = (w as i64, h as i64);
        prop_assert_eq!(t.sum(w + dx, y, w + dy, 0), 0);
        prop_assert_eq!(t.average(w + dx, y, w + dy, 0), 0.0);
        prop_assert_eq!(t.sum(y, h + dy, 0, h + dx), 0);
        prop_assert_eq!(t.average(y, h + dy, 0, h + dx), 0.0);
    }

    #[test]
    fn single_cell_equals_sample((w, h, data) in grid(), p in 0usize..576) {
        let t = SummedAreaTable::new(&data, w, h).unwrap();
        let p = p % (w * h);
        let (x, y) = ((p % w) as i64, (p / w) as i64);
        prop_assert_eq!(t.sum(x, y, x, y), data[p] as u64);
        prop_assert_eq!(t.average(x, y, x, y), data[p] as f64);
    }
}
