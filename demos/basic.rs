//! Runnable demonstration of [rea_star::find_path] over a small ASCII grid.
//!
//! Usage: `rea_star_demo [path-to-grid-file]`. A grid file is plain text,
//! `.` for traversable cells and `#` for blocked ones, all rows the same
//! width. The first and last traversable cells in reading order are used as
//! source and target. With no argument, a small built-in maze is used.

use bevy_math::ivec2;
use rea_star::{find_path_unbounded, GridView, PredicateGrid};
use std::env;
use std::fs;

const DEFAULT_MAZE: &str = "\
..........
.####.###.
.#....#...
.#.######.
.#.#....#.
.#.#.##.#.
...#.#..#.
.###.#.##.
.....#....
..........";

fn parse_grid(text: &str) -> (Vec<Vec<bool>>, usize, usize) {
    let rows: Vec<Vec<bool>> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c != '#').collect())
        .collect();
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    assert!(
        rows.iter().all(|row| row.len() == width),
        "all grid rows must have the same width"
    );
    (rows, width, height)
}

fn main() {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read grid file {path}: {e}");
        }),
        None => DEFAULT_MAZE.to_string(),
    };

    let (rows, width, height) = parse_grid(&text);
    let grid = PredicateGrid::new(width as i32, height as i32, move |p| {
        rows[p.y as usize][p.x as usize]
    });

    let all_cells: Vec<(usize, usize)> =
        (0..height).flat_map(|y| (0..width).map(move |x| (x, y))).collect();
    let is_free = |&(x, y): &(usize, usize)| grid.traversable(ivec2(x as i32, y as i32));
    let source = *all_cells
        .iter()
        .find(|c| is_free(c))
        .expect("grid has no traversable cells");
    let target = *all_cells.iter().rev().find(|c| is_free(c)).unwrap_or(&source);

    let source = ivec2(source.0 as i32, source.1 as i32);
    let target = ivec2(target.0 as i32, target.1 as i32);

    println!("source: {source:?}, target: {target:?}");

    match find_path_unbounded(source, target, &grid) {
        Some(result) => {
            println!("found path of cost {:.3}:", result.cost);
            for p in &result.path {
                println!("  ({}, {})", p.x, p.y);
            }
        }
        None => println!("no path found"),
    }
}
