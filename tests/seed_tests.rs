use termlife::engine;
use termlife::grid::Grid;
use termlife::parse_seed;

fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
    let mut live = Vec::new();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_alive(row, col) {
                live.push((row, col));
            }
        }
    }

    live
}

fn load(path: &str) -> anyhow::Result<Grid> {
    let bytes = std::fs::read(path)?;
    let seed = parse_seed::read_seed(&bytes)?;

    Ok(Grid::from_seed(&seed))
}

#[test]
fn test_seeds() -> anyhow::Result<()> {
    let seed_dir = std::fs::read_dir("tests/seeds")?;
    let mut tested = 0;
    let mut failed = Vec::new();

    for entry in seed_dir {
        let path = entry?.path();
        let bytes = std::fs::read(&path)?;

        match parse_seed::read_seed(&bytes) {
            Ok(seed) => {
                let grid = Grid::from_seed(&seed);

                assert_eq!(grid.height(), seed.rows.len());
                assert!(grid.alive_count() > 0);

                tested += 1;
            }
            Err(e) => failed.push((path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed to parse {:?}: {:#}", path, err);
        }

        panic!(
            "{}/{} seeds failed to parse",
            failed.len(),
            tested + failed.len()
        );
    }

    println!("Successfully parsed {} seeds", tested);

    Ok(())
}

#[test]
fn test_glider_translates_diagonally() -> anyhow::Result<()> {
    let mut grid = load("tests/seeds/glider.txt")?;
    let start = live_set(&grid);

    for _ in 0..4 {
        engine::advance(&mut grid);

        // A glider keeps its population through every phase
        assert_eq!(grid.alive_count(), 5);
    }

    let shifted: Vec<_> = start.iter().map(|&(row, col)| (row + 1, col + 1)).collect();

    assert_eq!(live_set(&grid), shifted);

    Ok(())
}

#[test]
fn test_toad_oscillates_with_period_two() -> anyhow::Result<()> {
    let mut grid = load("tests/seeds/toad.txt")?;
    let start = live_set(&grid);

    engine::advance(&mut grid);

    assert_ne!(live_set(&grid), start);
    assert_eq!(grid.alive_count(), 6);

    engine::advance(&mut grid);

    assert_eq!(live_set(&grid), start);

    Ok(())
}

#[test]
fn test_block_never_changes() -> anyhow::Result<()> {
    let mut grid = load("tests/seeds/block.txt")?;
    let start = live_set(&grid);

    for _ in 0..10 {
        engine::advance(&mut grid);
    }

    assert_eq!(live_set(&grid), start);

    Ok(())
}
