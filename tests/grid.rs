#[cfg(test)]
mod tests {
    use life_core::{DenseGrid, Grid, LifeError, PackedGrid};

    /// 3x3 grid with (0, 1), (1, 1) and (1, 0) alive.
    fn corner<G: Grid>() -> G {
        let mut grid = G::blank(3, 3).unwrap();
        grid.set(0, 1, true);
        grid.set(1, 1, true);
        grid.set(1, 0, true);
        grid
    }

    fn check_blank<G: Grid>() {
        let grid = G::blank(40, 3).unwrap();
        assert_eq!(grid.size(), (40, 3));
        for y in 0..3 {
            for x in 0..40 {
                assert!(!grid.get(x, y));
            }
        }
        assert_eq!(
            G::blank(0, 0).err(),
            Some(LifeError::InvalidDimension {
                width: 0,
                height: 0
            })
        );
    }

    fn check_toggle<G: Grid>() {
        let mut grid = G::blank(10, 10).unwrap();
        for (x, y) in [(0, 0), (9, 0), (0, 9), (9, 9), (4, 5)] {
            grid.set(x, y, true);
            assert!(grid.get(x, y));
            grid.set(x, y, false);
            assert!(!grid.get(x, y));
        }
    }

    fn check_border<G: Grid>() {
        let mut grid = G::blank(4, 4).unwrap();
        grid.set(0, 0, true);
        assert_eq!(grid.neighbor_count(0, 0), 0);
        assert_eq!(grid.neighbor_count(1, 0), 1);
        assert_eq!(grid.neighbor_count(0, 1), 1);
        // no wraparound
        assert_eq!(grid.neighbor_count(3, 0), 0);
        assert_eq!(grid.neighbor_count(0, 3), 0);
        assert_eq!(grid.neighbor_count(3, 3), 0);
    }

    fn check_full_neighbourhood<G: Grid>() {
        let mut grid = G::blank(3, 3).unwrap();
        grid.fill_from_generator(&mut || true);
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(1, 0), 5);
        assert_eq!(grid.population(), 9);
    }

    fn check_dump<G: Grid + std::fmt::Display>() {
        let grid: G = corner();
        assert_eq!(grid.dump(), "010\n110\n000\n");
        assert_eq!(grid.to_string(), grid.dump());
    }

    fn check_copy_into<G: Grid>() {
        let grid: G = corner();

        let mut smaller = G::blank(2, 2).unwrap();
        grid.copy_into(&mut smaller);
        assert_eq!(smaller.dump(), "01\n11\n");

        let mut larger = G::blank(3, 4).unwrap();
        grid.copy_into(&mut larger);
        assert_eq!(larger.dump(), "010\n110\n000\n000\n");
    }

    fn check_copy_into_keeps_uncovered<G: Grid>() {
        let grid: G = corner();
        let mut target = DenseGrid::blank(4, 4).unwrap();
        target.set(3, 3, true);
        target.set(0, 0, true);
        grid.copy_into(&mut target);
        // (0, 0) is covered by the source, (3, 3) is not
        assert_eq!(target.dump(), "0100\n1100\n0000\n0001\n");
    }

    fn check_generator_order<G: Grid>() {
        let mut grid = G::blank(3, 2).unwrap();
        let mut calls = 0;
        grid.fill_from_generator(&mut || {
            calls += 1;
            calls % 2 == 0
        });
        assert_eq!(calls, 6);
        assert_eq!(grid.dump(), "010\n101\n");
    }

    fn check_checked_access<G: Grid>() {
        let mut grid = G::blank(3, 2).unwrap();
        assert!(grid.is_legal_coordinates(2, 1));
        assert!(!grid.is_legal_coordinates(3, 0));
        assert!(!grid.is_legal_coordinates(0, 2));
        assert_eq!(grid.checked_set(2, 1, true), Ok(()));
        assert_eq!(grid.checked_get(2, 1), Ok(true));
        assert_eq!(
            grid.checked_get(0, 2),
            Err(LifeError::OutOfBounds {
                x: 0,
                y: 2,
                width: 3,
                height: 2
            })
        );
    }

    macro_rules! for_each_grid {
        ($($name:ident => $check:ident),* $(,)?) => {
            mod dense {
                use super::*;
                $(#[test] fn $name() { $check::<DenseGrid>(); })*
            }
            mod packed {
                use super::*;
                $(#[test] fn $name() { $check::<PackedGrid>(); })*
            }
        };
    }

    for_each_grid! {
        test_blank => check_blank,
        test_toggle => check_toggle,
        test_border => check_border,
        test_full_neighbourhood => check_full_neighbourhood,
        test_dump => check_dump,
        test_copy_into => check_copy_into,
        test_copy_into_keeps_uncovered => check_copy_into_keeps_uncovered,
        test_generator_order => check_generator_order,
        test_checked_access => check_checked_access,
    }

    #[test]
    fn test_copy_across_representations() {
        let packed: PackedGrid = corner();
        let mut dense = DenseGrid::blank(3, 3).unwrap();
        packed.copy_into(&mut dense);
        assert_eq!(dense.dump(), packed.dump());
    }
}
