// End-to-end puzzle scenarios run against the public API.

use std::collections::HashMap;

use rand::{rngs::StdRng, SeedableRng};
use word_hunt::{
    GeneratorConfig, GridGenerator, Position, Round, Scorer, SelectionPath, WordPool,
    WordValidator,
};

fn small_config(grid_size: usize, count: usize) -> GeneratorConfig {
    GeneratorConfig {
        grid_size,
        word_count: count..=count,
        ..GeneratorConfig::default()
    }
}

#[test]
fn sol_and_agua_fit_in_five_by_five() {
    let pool = WordPool::from_words(["SOL", "AGUA"]);
    let scorer = Scorer::default();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut puzzle =
            GridGenerator::generate_with_rng(pool.words(), &small_config(5, 2), &mut rng);

        assert_eq!(puzzle.words.len(), 2, "seed {seed}");
        assert_eq!(puzzle.grid.iter().flatten().count(), 25);
        assert!(puzzle.grid.iter().flatten().all(|c| c.is_ascii_uppercase()));

        let sol_cells = puzzle
            .words
            .iter()
            .find(|w| w.word == "SOL")
            .map(|w| w.cells.clone())
            .unwrap();

        let found = WordValidator::submit_selection(&mut puzzle, &sol_cells, &scorer).unwrap();
        assert_eq!(found.word, "SOL");
        assert_eq!(found.points, 30);
        assert!(puzzle.words.iter().find(|w| w.word == "SOL").unwrap().found);

        assert!(WordValidator::submit_selection(&mut puzzle, &sol_cells, &scorer).is_none());
        assert!(!puzzle.is_complete());
    }
}

#[test]
fn overlong_word_is_never_placed() {
    let pool = WordPool::from_words(["ABCDEFGHIJKLMNOPQRST"]);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = GridGenerator::generate_with_rng(pool.words(), &small_config(5, 1), &mut rng);

        assert!(puzzle.words.is_empty());
        assert_eq!(puzzle.grid.len(), 5);
        assert!(puzzle.grid.iter().all(|row| row.len() == 5));
        assert!(puzzle.grid.iter().flatten().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn shared_cells_agree_on_letter() {
    let pool = WordPool::default();

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle =
            GridGenerator::generate_with_rng(pool.words(), &small_config(10, 12), &mut rng);

        let mut claimed: HashMap<Position, char> = HashMap::new();
        for placed in &puzzle.words {
            for (pos, letter) in placed.cells.iter().zip(placed.word.chars()) {
                let existing = *claimed.entry(*pos).or_insert(letter);
                assert_eq!(existing, letter, "seed {seed} cell {pos}");
            }
        }
    }
}

#[test]
fn reverse_trace_matches() {
    let pool = WordPool::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut puzzle =
        GridGenerator::generate_with_rng(pool.words(), &GeneratorConfig::default(), &mut rng);
    let scorer = Scorer::default();

    let targets: Vec<(String, Vec<Position>)> = puzzle
        .words
        .iter()
        .map(|w| (w.word.clone(), w.cells.iter().rev().copied().collect()))
        .collect();

    for (word, reversed) in targets {
        let found =
            WordValidator::submit_selection(&mut puzzle, &reversed, &scorer).map(|m| m.word);
        assert_eq!(found, Some(word));
    }
    assert!(puzzle.is_complete());
}

#[test]
fn full_round_through_drag_gestures() {
    let pool = WordPool::default();
    let mut rng = StdRng::seed_from_u64(7);
    let puzzle =
        GridGenerator::generate_with_rng(pool.words(), &GeneratorConfig::default(), &mut rng);
    assert!(!puzzle.words.is_empty());

    let paths: Vec<Vec<Position>> = puzzle.words.iter().map(|w| w.cells.clone()).collect();
    let letters: usize = puzzle.words.iter().map(|w| w.len()).sum();
    let total = puzzle.words.len();

    let mut round = Round::new(puzzle, Scorer::default());
    let mut selection = SelectionPath::new(round.puzzle().size);

    for path in paths {
        round.tick(5);
        selection.start(path[0]).unwrap();
        for pos in &path[1..] {
            selection.extend(*pos).unwrap();
        }
        let traced = selection.finish();
        assert!(round.submit(&traced).is_some());
    }

    let summary = round.summary().unwrap();
    assert_eq!(summary.words_found, total);
    assert_eq!(summary.word_points, letters as u64 * 10);
    assert_eq!(summary.elapsed_secs, 5 * total as u64);
    assert_eq!(summary.time_bonus, (300 - 5 * total as u64) * 2);
    assert_eq!(summary.final_score, summary.word_points + summary.time_bonus);
}

#[test]
fn puzzle_serializes_for_host() {
    let pool = WordPool::default();
    let mut rng = StdRng::seed_from_u64(11);
    let puzzle =
        GridGenerator::generate_with_rng(pool.words(), &GeneratorConfig::default(), &mut rng);

    let json = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(json["size"], 15);
    assert_eq!(json["grid"].as_array().unwrap().len(), 15);
    assert_eq!(json["words"].as_array().unwrap().len(), puzzle.words.len());
}
