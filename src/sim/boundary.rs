//! Rectangular play areas that blocks are restricted to
//!
//! Both boundary types describe the same rectangle: `columns × rows` cells of
//! `cell_size` pixels, with the top-left corner at `origin`. The screen y axis
//! points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Common view of a rectangular boundary
pub trait Boundary {
    /// Top-left corner
    fn origin(&self) -> Vec2;
    fn rows(&self) -> u32;
    fn columns(&self) -> u32;
    fn cell_size(&self) -> f32;

    /// `(columns·cell_size, rows·cell_size)`
    fn size(&self) -> Vec2 {
        Vec2::new(
            self.columns() as f32 * self.cell_size(),
            self.rows() as f32 * self.cell_size(),
        )
    }

    fn width(&self) -> f32 {
        self.size().x
    }

    fn height(&self) -> f32 {
        self.size().y
    }

    /// Bottom-right corner
    fn max_corner(&self) -> Vec2 {
        self.origin() + self.size()
    }

    /// Whether a rectangle at `top_left` with `size` lies fully inside
    fn contains_rect(&self, top_left: Vec2, size: Vec2) -> bool {
        let min = self.origin();
        let max = self.max_corner() - size;
        top_left.x >= min.x && top_left.y >= min.y && top_left.x <= max.x && top_left.y <= max.y
    }

    /// Whether a rectangle of `size` can fit at all
    fn fits(&self, size: Vec2) -> bool {
        size.x <= self.width() && size.y <= self.height()
    }

    /// Cell corner `[row][column]`, computed from the geometry
    fn lattice_point(&self, row: usize, column: usize) -> Option<Vec2> {
        if row > self.rows() as usize || column > self.columns() as usize {
            return None;
        }
        Some(self.origin() + Vec2::new(column as f32, row as f32) * self.cell_size())
    }

    /// The materialized node lattice, if this boundary has one
    fn lattice(&self) -> Option<&Grid> {
        None
    }
}

/// Rectangle-only boundary (no node lattice)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playground {
    pub origin: Vec2,
    pub rows: u32,
    pub columns: u32,
    pub cell_size: f32,
}

impl Playground {
    pub fn new(origin: Vec2, rows: u32, columns: u32, cell_size: f32) -> Self {
        Self {
            origin,
            rows,
            columns,
            cell_size,
        }
    }
}

impl Boundary for Playground {
    fn origin(&self) -> Vec2 {
        self.origin
    }
    fn rows(&self) -> u32 {
        self.rows
    }
    fn columns(&self) -> u32 {
        self.columns
    }
    fn cell_size(&self) -> f32 {
        self.cell_size
    }
}

/// Boundary with a materialized lattice of cell corner nodes
///
/// `nodes[r][c] == origin + (c·cell_size, r·cell_size)` for
/// `r in 0..=rows`, `c in 0..=columns`. The lattice is built once and never
/// mutated, so the fields stay private.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    area: Playground,
    nodes: Vec<Vec<Vec2>>,
}

impl Grid {
    pub fn new(origin: Vec2, rows: u32, columns: u32, cell_size: f32) -> Self {
        let nodes = (0..=rows)
            .map(|r| {
                let y = origin.y + r as f32 * cell_size;
                (0..=columns)
                    .map(|c| Vec2::new(origin.x + c as f32 * cell_size, y))
                    .collect()
            })
            .collect();

        Self {
            area: Playground::new(origin, rows, columns, cell_size),
            nodes,
        }
    }

    /// Grid with the same shape as an existing playground
    pub fn from_playground(area: Playground) -> Self {
        Self::new(area.origin, area.rows, area.columns, area.cell_size)
    }

    /// The plain rectangle this grid covers
    pub fn playground(&self) -> Playground {
        self.area
    }

    /// Lattice rows (`rows + 1` of them, each `columns + 1` long)
    pub fn nodes(&self) -> &[Vec<Vec2>] {
        &self.nodes
    }

    pub fn node(&self, row: usize, column: usize) -> Option<Vec2> {
        self.nodes.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    /// All nodes in row-major order
    pub fn iter_nodes(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.nodes.iter().flat_map(|row| row.iter().copied())
    }
}

impl Boundary for Grid {
    fn origin(&self) -> Vec2 {
        self.area.origin
    }
    fn rows(&self) -> u32 {
        self.area.rows
    }
    fn columns(&self) -> u32 {
        self.area.columns
    }
    fn cell_size(&self) -> f32 {
        self.area.cell_size
    }
    fn lattice_point(&self, row: usize, column: usize) -> Option<Vec2> {
        self.node(row, column)
    }
    fn lattice(&self) -> Option<&Grid> {
        Some(self)
    }
}

/// The boundary a world owns: either policy-only rectangle or full grid
#[derive(Debug, Clone, PartialEq)]
pub enum Arena {
    Playground(Playground),
    Grid(Grid),
}

impl Arena {
    /// Grid when `lattice` is set, otherwise a plain playground
    pub fn new(origin: Vec2, rows: u32, columns: u32, cell_size: f32, lattice: bool) -> Self {
        if lattice {
            Arena::Grid(Grid::new(origin, rows, columns, cell_size))
        } else {
            Arena::Playground(Playground::new(origin, rows, columns, cell_size))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arena::Playground(_) => "playground",
            Arena::Grid(_) => "grid",
        }
    }

    fn area(&self) -> Playground {
        match self {
            Arena::Playground(area) => *area,
            Arena::Grid(grid) => grid.playground(),
        }
    }
}

impl From<Grid> for Arena {
    fn from(grid: Grid) -> Self {
        Arena::Grid(grid)
    }
}

impl From<Playground> for Arena {
    fn from(area: Playground) -> Self {
        Arena::Playground(area)
    }
}

impl Boundary for Arena {
    fn origin(&self) -> Vec2 {
        self.area().origin
    }
    fn rows(&self) -> u32 {
        self.area().rows
    }
    fn columns(&self) -> u32 {
        self.area().columns
    }
    fn cell_size(&self) -> f32 {
        self.area().cell_size
    }
    fn lattice_point(&self, row: usize, column: usize) -> Option<Vec2> {
        match self {
            Arena::Playground(area) => area.lattice_point(row, column),
            Arena::Grid(grid) => grid.lattice_point(row, column),
        }
    }
    fn lattice(&self) -> Option<&Grid> {
        match self {
            Arena::Playground(_) => None,
            Arena::Grid(grid) => Some(grid),
        }
    }
}
