//! Tests for breadth-first growth, the growth ceiling and outline extraction

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::{HashMap, HashSet};

    use territory::TerritoryError;
    use territory::algorithm::growth::{
        extract_outline, extract_outline_bounded, grow, grow_bounded,
    };
    use territory::geometry::GridCell;

    fn cell(x: i32, z: i32) -> GridCell {
        GridCell::new(x, z, 0)
    }

    fn block(c: GridCell) -> bool {
        (1..=3).contains(&c.x) && (1..=3).contains(&c.z)
    }

    fn as_set(cells: &[GridCell]) -> HashSet<GridCell> {
        cells.iter().copied().collect()
    }

    // Tests the 3x3 block grown from its centre
    #[test]
    fn test_grow_returns_exact_block() {
        let grown = grow(cell(2, 2), block);

        assert_eq!(grown.len(), 9);
        let expected: HashSet<_> = (1..=3)
            .flat_map(|z| (1..=3).map(move |x| cell(x, z)))
            .collect();
        assert_eq!(as_set(&grown), expected);
    }

    #[test]
    fn test_grow_from_rejected_seed_is_empty() {
        assert!(grow(cell(10, 10), block).is_empty());
    }

    // Tests the predicate runs at most once per cell
    // Verified by marking cells seen only after testing
    #[test]
    fn test_grow_tests_each_cell_once() {
        let mut calls: HashMap<GridCell, usize> = HashMap::new();
        let grown = grow(cell(0, 0), |c| {
            *calls.entry(c).or_default() += 1;
            c.x.abs() <= 10 && c.z.abs() <= 10
        });

        assert_eq!(grown.len(), 21 * 21);
        assert!(calls.values().all(|&count| count == 1));
    }

    #[test]
    fn test_grow_is_four_connected() {
        let grown = grow(cell(0, 0), |c| c == cell(0, 0) || c == cell(1, 1));

        assert_eq!(grown, vec![cell(0, 0)]);
    }

    // Tests the ceiling turns an unbounded predicate into an error
    // Verified by ignoring the limit
    #[test]
    fn test_grow_bounded_aborts_on_unbounded_predicate() {
        let result = grow_bounded(cell(0, 0), |_| true, 500);

        assert!(matches!(
            result,
            Err(TerritoryError::GrowthLimitExceeded { limit: 500 })
        ));
    }

    #[test]
    fn test_grow_bounded_allows_region_at_limit() {
        let grown = grow_bounded(cell(2, 2), block, 9);

        assert_eq!(grown.map(|cells| cells.len()).ok(), Some(9));
    }

    // Tests the outline of the 3x3 block is its eight perimeter cells
    // Verified by filtering with neighbors8
    #[test]
    fn test_extract_outline_returns_perimeter() {
        let region = extract_outline(cell(2, 2), block);
        let outline = as_set(region.outline().cells());

        assert_eq!(region.outline().len(), 8);
        assert!(!outline.contains(&cell(2, 2)));
        let expected: HashSet<_> = (1..=3)
            .flat_map(|z| (1..=3).map(move |x| cell(x, z)))
            .filter(|&c| c != cell(2, 2))
            .collect();
        assert_eq!(outline, expected);
    }

    // Tests re-extracting the outline over the same predicate gives the same boundary
    #[test]
    fn test_extract_outline_is_idempotent() {
        let blob = |c: GridCell| (c.x - 4).pow(2) + (c.z - 4).pow(2) <= 10;
        let first = extract_outline(cell(4, 4), blob);
        let Some(reseed) = first.outline().first() else {
            unreachable!("blob outline is non-empty");
        };
        let second = extract_outline(reseed, blob);

        assert_eq!(
            as_set(first.outline().cells()),
            as_set(second.outline().cells())
        );
    }

    // Tests outline extraction does not re-run the predicate on rejected neighbours
    #[test]
    fn test_extract_outline_reuses_predicate_results() {
        let calls = Cell::new(0_usize);
        let _ = extract_outline(cell(2, 2), |c| {
            calls.set(calls.get() + 1);
            block(c)
        });

        // 9 accepted plus the 12 cells bordering the block orthogonally
        assert_eq!(calls.get(), 21);
    }

    #[test]
    fn test_extract_outline_bounded_propagates_limit() {
        assert!(extract_outline_bounded(cell(2, 2), block, 4).is_err());
        assert!(extract_outline_bounded(cell(2, 2), block, 9).is_ok());
    }
}
