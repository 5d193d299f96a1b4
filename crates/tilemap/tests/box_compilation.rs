use tilemap::{
    BoxManager, CompileConfig, EmptyInputPolicy, ErrorKind, Grid, MapDimensions, Palette,
    PaletteGrid, Position, TileBox, TileDef, TileStorage, TileType,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tilemap=trace")
        .with_test_writer()
        .try_init();
}

/// Three abutting fields where the last one overlaps the path's east column.
#[test]
fn fields_and_path_compile_with_last_box_winning() {
    init_tracing();

    let boxes = vec![
        TileBox::new(0, 0, 10, 20, "grass").unwrap(),
        TileBox::new(10, 0, 5, 20, "sand").unwrap(),
        TileBox::new(14, 0, 10, 20, "grass").unwrap(),
    ];
    let grid = BoxManager::new(boxes).to_grid("dirt").unwrap();

    assert_eq!(grid.dimensions(), MapDimensions::new(24, 20));
    assert_eq!(*grid.get(0, 0).unwrap(), "grass");
    assert_eq!(*grid.get(9, 19).unwrap(), "grass");
    for x in 10..=13 {
        assert_eq!(*grid.get(x, 0).unwrap(), "sand", "column {x}");
    }
    assert_eq!(*grid.get(14, 0).unwrap(), "grass");
    assert_eq!(*grid.get(22, 19).unwrap(), "grass");
    assert_eq!(*grid.get(23, 19).unwrap(), "grass");
    assert!(grid.iter().all(|(_, tile)| *tile != "dirt"));
    assert_eq!(grid.get(24, 0).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn object_tiles_compile_and_expose_their_data() {
    init_tracing();

    let pond = TileBox::new(2, 2, 3, 3, TileDef::WATER).unwrap();
    let beach = TileBox::at(pond.corner_nw(), 3, 2, TileDef::SAND).unwrap();
    let grid = BoxManager::new(vec![pond.clone(), beach.clone()])
        .to_grid(TileDef::DIRT)
        .unwrap();

    assert_eq!(grid.dimensions(), MapDimensions::new(5, 6));
    // Beach starts on the pond's top row and overwrites it.
    assert_eq!(grid.get(2, 4).unwrap().move_cost, 7);
    assert_eq!(grid.get(3, 3).unwrap().move_cost, 15);
    assert_eq!(*grid.get(0, 0).unwrap(), TileDef::DIRT);

    let total: u32 = grid.iter().map(|(_, tile)| tile.move_cost).sum();
    let expected = 6 * 7 + 6 * 15 + (30 - 12) * TileDef::DEFAULT_MOVE_COST;
    assert_eq!(total, expected);
}

#[test]
fn generic_rasterize_targets_any_storage() {
    init_tracing();

    let manager = BoxManager::new(vec![
        TileBox::new(0, 0, 2, 2, TileType::Grass).unwrap(),
        TileBox::new(1, 1, 2, 2, TileType::Water).unwrap(),
    ]);
    let palette = Palette::new(vec![TileType::Dirt, TileType::Grass, TileType::Water]).unwrap();
    let mut indexed = PaletteGrid::with_default(4, 4, palette, &TileType::Dirt).unwrap();
    let mut dense = Grid::new(4, 4, TileType::Dirt).unwrap();

    let config = CompileConfig::default();
    manager
        .rasterize_into(&mut indexed, &TileType::Dirt, &config)
        .unwrap();
    manager
        .rasterize_into(&mut dense, &TileType::Dirt, &config)
        .unwrap();

    let storages: [&dyn TileStorage<TileType>; 2] = [&indexed, &dense];
    for storage in storages {
        assert_eq!(storage.tile(Position::new(0, 0)).unwrap(), TileType::Grass);
        assert_eq!(storage.tile(Position::new(1, 1)).unwrap(), TileType::Water);
        assert_eq!(storage.tile(Position::new(3, 3)).unwrap(), TileType::Dirt);
        assert!(!storage.contains(Position::new(4, 0)));
    }
}

#[test]
fn empty_box_list_is_rejected_unless_a_minimum_is_configured() {
    init_tracing();

    let manager = BoxManager::<TileType>::from(Vec::new());
    assert_eq!(
        manager.to_grid(TileType::Dirt).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );

    let config = CompileConfig::new()
        .with_empty_policy(EmptyInputPolicy::MinimumSize(MapDimensions::new(1, 1)));
    let grid = manager.to_grid_with(TileType::Grass, &config).unwrap();
    assert_eq!(*grid.get(0, 0).unwrap(), TileType::Grass);
}
