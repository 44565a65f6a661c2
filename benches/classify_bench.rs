//! Rule Engine Benchmarks
//!
//! Performance benchmarks for parsing, validation and classification using
//! Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qxiangqi::engine::{
    check_classical_rule, classify_move, parse_move, validate_move, Board, Color, Location,
    PathPieces,
};

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn bench_parse_move(c: &mut Criterion) {
    c.bench_function("parse_move", |b| {
        b.iter(|| {
            black_box(parse_move(black_box("h9g7")).ok());
            black_box(parse_move(black_box("b7^b4e7")).ok());
            black_box(parse_move(black_box("b4e7^b7")).ok());
        })
    });
}

fn bench_path_pieces(c: &mut Criterion) {
    let board = Board::initial();
    c.bench_function("path_pieces_file", |b| {
        b.iter(|| black_box(board.path_pieces(loc("a0"), loc("a9")).ok()))
    });
}

fn bench_classical_rule(c: &mut Criterion) {
    let board = Board::initial();
    let path = [loc("b7")];
    c.bench_function("check_classical_rule_cannon", |b| {
        b.iter(|| black_box(check_classical_rule(&board, loc("b2"), loc("b9"), &path).is_ok()))
    });
}

fn bench_classify_slide(c: &mut Criterion) {
    let mut board = Board::initial();
    board.set_entangled(loc("a3"), true);
    let path = board.path_pieces(loc("a0"), loc("a6")).unwrap_or_default();
    let no_path = PathPieces::clear();
    let sources = [loc("a0")];
    let targets = [loc("a6")];
    c.bench_function("classify_slide_capture", |b| {
        b.iter(|| black_box(classify_move(&board, &sources, &targets, &path, &no_path).ok()))
    });
}

fn bench_validate_every_opening_horse_move(c: &mut Criterion) {
    let board = Board::initial();
    let requests: Vec<_> = ["h9g7", "h9i7", "b9a7", "b9c7", "h9f8"]
        .iter()
        .filter_map(|m| parse_move(m).ok())
        .collect();
    c.bench_function("validate_opening_horse_moves", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(validate_move(&board, Color::Red, request).is_ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_move,
    bench_path_pieces,
    bench_classical_rule,
    bench_classify_slide,
    bench_validate_every_opening_horse_move
);
criterion_main!(benches);
