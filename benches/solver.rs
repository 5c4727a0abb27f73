//! Benchmarks for the word-path search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boggle::solver::generate;
use boggle::{format_path, solve, Board, Discipline, PathState, SearchConfig, Stack, WordList};

const LETTERS: &str = "CATSERIDE";
const WORDS: &str = "cat\ncats\nsat\nate\neat\ntea\nrid\nride\nrides\nside\ntide\nset\nstar\n";

fn board() -> Board {
    Board::from_letters(3, LETTERS.chars()).unwrap()
}

/// Benchmark a full 3x3 search under both disciplines.
fn bench_solve(c: &mut Criterion) {
    let board = board();
    let dictionary = WordList::parse(WORDS);

    let mut group = c.benchmark_group("solve_3x3");
    for discipline in [Discipline::Stack, Discipline::Queue] {
        let config = SearchConfig {
            discipline,
            ..SearchConfig::default()
        };
        group.bench_function(discipline.name(), |b| {
            b.iter(|| solve(black_box(&board), &dictionary, &config).unwrap())
        });
    }
    group.finish();
}

/// Benchmark generating every path from the center cell without filtering.
fn bench_generate(c: &mut Criterion) {
    let board = board();

    c.bench_function("generate_center", |b| {
        b.iter(|| {
            let mut store = Stack::new();
            let root = PathState::start(&board, 1, 1).unwrap();
            generate(black_box(&board), root, &mut store).unwrap()
        })
    });
}

/// Benchmark formatting a path for display.
fn bench_format_path(c: &mut Criterion) {
    let board = board();
    let dictionary = WordList::parse(WORDS);
    let outcome = solve(&board, &dictionary, &SearchConfig::default()).unwrap();
    let path = outcome.words[0].path();

    c.bench_function("format_path", |b| b.iter(|| format_path(black_box(path))));
}

criterion_group!(benches, bench_solve, bench_generate, bench_format_path);
criterion_main!(benches);
