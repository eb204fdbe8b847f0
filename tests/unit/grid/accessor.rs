//! Tests for socket editing, coordinate layout and offset adjustment

#[cfg(test)]
mod tests {
    use traygrid::GridError;
    use traygrid::grid::{
        GridAccessor, GridCoord, GridDefinition, GridId, GridStore, SocketStatus, SocketUsage,
    };
    use traygrid::io::configuration::DEFAULT_SOCKET_OFFSET_MM;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // Tests positions are first socket plus pitch times zero-based axis
    // Verified by using 1-based axis numbers in the layout
    #[test]
    fn test_initialize_coordinates() -> traygrid::Result<()> {
        let mut store = GridStore::new(GridDefinition::new(10, 10));
        let mut accessor = GridAccessor::new(&mut store);
        accessor.initialize_coordinates(GridCoord::new(10.0, 10.0), GridCoord::new(2.0, 3.0));

        let first = accessor.socket_coordinates(GridId::new(1, 1))?;
        assert!(close(first.x, 10.0) && close(first.y, 10.0));

        let corner = accessor.socket_coordinates(GridId::new(10, 10))?;
        assert!(close(corner.x, 28.0), "x was {}", corner.x);
        assert!(close(corner.y, 37.0), "y was {}", corner.y);

        let middle = accessor.socket_coordinates(GridId::new(4, 6))?;
        assert!(close(middle.x, 20.0) && close(middle.y, 19.0));
        Ok(())
    }

    // Tests column shift moves only columns after the given one and accumulates offset
    // Verified by using >= instead of > for the column comparison
    #[test]
    fn test_adjust_column_offset() -> traygrid::Result<()> {
        let mut store = GridStore::new(GridDefinition::new(5, 2));
        let mut accessor = GridAccessor::new(&mut store);
        accessor.initialize_coordinates(GridCoord::new(0.0, 0.0), GridCoord::new(1.0, 1.0));
        accessor.adjust_column_offset(3, 0.5);

        assert!(close(accessor.socket_coordinates(GridId::new(1, 3))?.x, 2.0));
        assert!(close(accessor.socket_coordinates(GridId::new(2, 4))?.x, 3.5));
        assert!(close(accessor.socket_coordinates(GridId::new(1, 5))?.x, 4.5));
        assert!(close(accessor.socket_coordinates(GridId::new(2, 5))?.y, 1.0));

        let x_offsets = store.x_offsets().to_vec();
        let shifted = DEFAULT_SOCKET_OFFSET_MM + 0.5;
        assert_eq!(
            x_offsets.iter().filter(|&&offset| close(offset, shifted)).count(),
            4
        );
        assert!(store.y_offsets().iter().all(|&offset| close(offset, DEFAULT_SOCKET_OFFSET_MM)));
        Ok(())
    }

    // Tests row shift moves Y of rows after the given one and leaves X untouched
    // Verified by applying the row shift to X
    #[test]
    fn test_adjust_row_offset() -> traygrid::Result<()> {
        let mut store = GridStore::new(GridDefinition::new(2, 4));
        let mut accessor = GridAccessor::new(&mut store);
        accessor.initialize_coordinates(GridCoord::new(0.0, 0.0), GridCoord::new(1.0, 1.0));
        accessor.adjust_row_offset(2, -0.25);

        let unshifted = accessor.socket_coordinates(GridId::new(2, 2))?;
        assert!(close(unshifted.x, 1.0) && close(unshifted.y, 1.0));

        let shifted = accessor.socket_coordinates(GridId::new(3, 2))?;
        assert!(close(shifted.x, 1.0) && close(shifted.y, 1.75));

        assert!(store.x_offsets().iter().all(|&offset| close(offset, DEFAULT_SOCKET_OFFSET_MM)));
        Ok(())
    }

    // Tests enable, disable and skip write the usage flag of one socket
    // Verified by writing the usage of index zero
    #[test]
    fn test_usage_flags() -> traygrid::Result<()> {
        let mut store = GridStore::new(GridDefinition::new(3, 3));
        let mut accessor = GridAccessor::new(&mut store);

        accessor.disable_socket(GridId::new(2, 2))?;
        accessor.skip_socket(GridId::new(3, 1))?;
        assert_eq!(accessor.usage(GridId::new(2, 2))?, SocketUsage::NotInUse);
        assert_eq!(accessor.usage(GridId::new(3, 1))?, SocketUsage::SkipOver);
        assert_eq!(accessor.usage(GridId::new(1, 1))?, SocketUsage::InUse);

        accessor.enable_socket(GridId::new(2, 2))?;
        assert_eq!(accessor.usage(GridId::new(2, 2))?, SocketUsage::InUse);

        let mask = store.usage_mask();
        assert_eq!(mask.count_ones(), 8);
        assert_eq!(mask.get(6).as_deref(), Some(&false));
        Ok(())
    }

    // Tests angle, sub-section, status and tag setters land on the right index
    // Verified by off-by-one in the fill index
    #[test]
    fn test_attribute_setters() -> traygrid::Result<()> {
        let mut store = GridStore::<&str>::with_tags(GridDefinition::new(3, 2));
        let mut accessor = GridAccessor::new(&mut store);
        let id = GridId::new(2, 1);

        accessor.set_socket_angle(id, 90.0)?;
        accessor.set_sub_section(id, 4)?;
        accessor.set_status(id, SocketStatus::Completed)?;
        assert_eq!(accessor.set_tag(id, "first")?, None);
        assert_eq!(accessor.set_tag(id, "second")?, Some("first"));

        assert!(store.angles().get(3).is_some_and(|&angle| close(angle, 90.0)));
        assert_eq!(store.sub_sections().get(3).copied(), Some(4));
        assert_eq!(
            store.statuses().get(3).copied(),
            Some(SocketStatus::Completed)
        );
        assert_eq!(store.tags().get(3).copied().flatten(), Some("second"));
        assert_eq!(store.sub_sections().get(2).copied(), Some(0));
        Ok(())
    }

    // Tests out-of-bounds identifiers are rejected as invalid arguments
    // Verified by returning index zero for unknown identifiers
    #[test]
    fn test_out_of_bounds_lookup() {
        let mut store = GridStore::new(GridDefinition::new(3, 2));
        let mut accessor = GridAccessor::new(&mut store);

        for id in [GridId::EMPTY, GridId::new(3, 1), GridId::new(1, 4), GridId::new(0, 1)] {
            let result = accessor.disable_socket(id);
            assert_eq!(
                result,
                Err(GridError::IdOutOfBounds {
                    id,
                    columns: 3,
                    rows: 2
                })
            );
            assert!(result.is_err_and(|error| error.is_invalid_argument()));
        }
        assert!(store.usage().iter().all(|&usage| usage == SocketUsage::InUse));
    }

    // Tests the memoized lookup returns the same index as a fresh lookup
    // Verified by caching the index before validating
    #[test]
    fn test_repeated_lookup_uses_same_index() -> traygrid::Result<()> {
        let mut store = GridStore::new(GridDefinition::new(4, 4));
        let accessor = GridAccessor::new(&mut store);

        let id = GridId::new(3, 2);
        let first = accessor.index_of(id)?;
        let second = accessor.index_of(id)?;
        assert_eq!(first, 9);
        assert_eq!(first, second);

        assert_eq!(accessor.index_of(GridId::new(1, 1))?, 0);
        assert!(accessor.index_of(GridId::new(5, 1)).is_err());
        assert_eq!(accessor.index_of(id)?, 9);
        Ok(())
    }

    // Tests worker-pool shifts give the same positions and offsets as the direct shifts
    // Verified by applying the row shift on the worker to X
    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_async_offsets_match_sync() -> traygrid::Result<()> {
        let definition = GridDefinition::new(4, 3);
        let first = GridCoord::new(5.0, 5.0);
        let pitch = GridCoord::new(2.0, 2.5);

        let mut direct = GridStore::new(definition);
        {
            let mut accessor = GridAccessor::new(&mut direct);
            accessor.initialize_coordinates(first, pitch);
            accessor.adjust_column_offset(2, 0.75);
            accessor.adjust_row_offset(1, -0.5);
        }

        let mut worker = GridStore::new(definition);
        {
            let mut accessor = GridAccessor::new(&mut worker);
            accessor.initialize_coordinates(first, pitch);
            accessor.adjust_column_offset_async(2, 0.75).await?;
            accessor.adjust_row_offset_async(1, -0.5).await?;
        }

        assert_eq!(worker.x_positions(), direct.x_positions());
        assert_eq!(worker.y_positions(), direct.y_positions());
        assert_eq!(worker.x_offsets(), direct.x_offsets());
        assert_eq!(worker.y_offsets(), direct.y_offsets());

        let moved = worker.socket_coordinates(GridId::new(2, 3))?;
        assert!(close(moved.x, 9.75) && close(moved.y, 7.0));
        Ok(())
    }
}
