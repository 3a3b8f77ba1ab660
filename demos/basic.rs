//! Basic example of using the word search engine

use wordsearch_core::{
    project, reveal_all, CellState, Generator, MemoryStore, Position, PuzzleConfig, PuzzleSession,
};

fn main() {
    // Generate a puzzle
    println!("Generating a 10x10 puzzle with seed 1...\n");
    let words = ["CAT", "DOG", "HORSE", "RABBIT"];
    let mut generator = Generator::new(10, 10, 1);
    let puzzle = generator.generate(&words);

    println!("Generated grid:");
    println!("{}", puzzle.grid);

    for placement in &puzzle.placements {
        println!(
            "{:<8} at {} heading ({}, {})",
            placement.word, placement.start, placement.direction.dr, placement.direction.dc
        );
    }
    if !puzzle.unplaced.is_empty() {
        println!("Could not place: {}", puzzle.unplaced.join(", "));
    }

    // Reveal the answers the way the solution page does
    let reveal = reveal_all(&puzzle.grid, &words);
    println!("\nRevealed {} of {} words", reveal.found.len(), words.len());

    // Play through a session
    println!("\n--- Playing a session ---\n");
    let config = PuzzleConfig::new(10, 10, 1, &words);
    let store = MemoryStore::new();
    let mut session = match PuzzleSession::new(&config, Some("/puzzles/day001/"), Box::new(store.clone())) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Invalid config: {}", err);
            return;
        }
    };

    for placement in &reveal.found {
        let cells = placement.cells();
        let (start, end) = (cells[0], cells[cells.len() - 1]);
        // Select backwards to show reversed matching
        if let Some(found) = session.commit(end, start) {
            println!("Found {} ({} cells)", found.word, found.cells.len());
        }
    }

    // A crooked selection is ignored
    let crooked = session.commit(Position::new(0, 0), Position::new(1, 2));
    println!("Crooked selection matched: {}", crooked.is_some());

    let view = project(&session);
    let found_cells = view.cells.iter().filter(|c| c.state == CellState::Found).count();
    println!("\nComplete: {} ({} highlighted cells)", view.complete, found_cells);
    println!(
        "Saved under {}: {}",
        session.storage_key(),
        store.get(session.storage_key()).unwrap_or_default()
    );
}
