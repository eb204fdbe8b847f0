//! Tests for grid dimensions and fill-index arithmetic

#[cfg(test)]
mod tests {
    use traygrid::grid::{GridDefinition, GridId};

    // Tests cell count is the product of both axes
    // Verified by summing instead of multiplying
    #[test]
    fn test_cell_count() {
        let definition = GridDefinition::new(3, 2);
        assert_eq!(definition.columns(), 3);
        assert_eq!(definition.rows(), 2);
        assert_eq!(definition.cell_count(), 6);
        assert!(!definition.is_empty());
    }

    // Tests the largest grid does not overflow the cell count
    // Verified by computing the product in u8
    #[test]
    fn test_largest_grid_cell_count() {
        assert_eq!(GridDefinition::new(255, 255).cell_count(), 65_025);
    }

    // Tests a zero axis yields an empty grid
    // Verified by treating zero as one
    #[test]
    fn test_zero_axis_is_empty() {
        assert!(GridDefinition::new(0, 5).is_empty());
        assert!(GridDefinition::new(5, 0).is_empty());
        assert!(GridDefinition::empty().is_empty());
        assert_eq!(GridDefinition::default(), GridDefinition::empty());
    }

    // Tests fill index is row-major and 1-based identifiers map to 0-based indices
    // Verified by using column-major index arithmetic
    #[test]
    fn test_index_of_row_major() {
        let definition = GridDefinition::new(3, 2);
        assert_eq!(definition.index_of(GridId::new(1, 1)), Some(0));
        assert_eq!(definition.index_of(GridId::new(1, 3)), Some(2));
        assert_eq!(definition.index_of(GridId::new(2, 1)), Some(3));
        assert_eq!(definition.index_of(GridId::new(2, 3)), Some(5));
    }

    // Tests identifiers outside the grid have no index
    // Verified by allowing row 0
    #[test]
    fn test_index_of_out_of_bounds() {
        let definition = GridDefinition::new(3, 2);
        assert_eq!(definition.index_of(GridId::EMPTY), None);
        assert_eq!(definition.index_of(GridId::new(3, 1)), None);
        assert_eq!(definition.index_of(GridId::new(1, 4)), None);
        assert_eq!(definition.index_of(GridId::new(0, 2)), None);
        assert!(!definition.contains(GridId::new(2, 0)));
    }

    // Tests id_at is the inverse of index_of across the whole grid
    // Verified by swapping row and column in id_at
    #[test]
    fn test_id_at_inverts_index_of() {
        let definition = GridDefinition::new(4, 3);
        for index in 0..definition.cell_count() {
            let id = definition.id_at(index);
            assert!(id.is_some(), "index {index} has no identifier");
            assert_eq!(id.and_then(|id| definition.index_of(id)), Some(index));
        }
        assert_eq!(definition.id_at(definition.cell_count()), None);
        assert_eq!(GridDefinition::new(0, 3).id_at(0), None);
    }
}
