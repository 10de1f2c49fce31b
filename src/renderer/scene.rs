//! Draw order for a whole frame: background, grid, node markers, blocks

use glam::Vec2;

use super::canvas::Canvas;
use super::vertex::{Palette, colors};
use crate::sim::{Boundary, World};

/// Corner radius of the grid panel
const GRID_CORNER_RADIUS: f32 = 2.0;
/// Gridline width in pixels
const GRID_LINE_WIDTH: f32 = 1.0;
/// Radius of a node marker
const NODE_MARKER_RADIUS: f32 = 1.0;

/// Fill the whole viewport
pub fn clear(canvas: &mut impl Canvas, viewport: Vec2, color: [f32; 4]) {
    canvas.fill_rect(Vec2::ZERO, viewport, color);
}

/// Filled panel plus a line at each row and column boundary from the origin
///
/// Works for any boundary; a playground draws the same cells as a grid.
pub fn draw_grid(
    canvas: &mut impl Canvas,
    area: &impl Boundary,
    fill: [f32; 4],
    line: [f32; 4],
) {
    let origin = area.origin();
    let size = area.size();
    let cell = area.cell_size();

    canvas.fill_rounded_rect(origin, size, GRID_CORNER_RADIUS, fill);

    for r in 0..area.rows() {
        let y = origin.y + r as f32 * cell;
        canvas.line(
            Vec2::new(origin.x, y),
            Vec2::new(origin.x + size.x, y),
            GRID_LINE_WIDTH,
            colors::GRID_LINE,
        );
    }
    for c in 0..area.columns() {
        let x = origin.x + c as f32 * cell;
        canvas.line(
            Vec2::new(x, origin.y),
            Vec2::new(x, origin.y + size.y),
            GRID_LINE_WIDTH,
            colors::GRID_LINE,
        );
    }
}

/// Small outlines on the given lattice nodes
pub fn draw_node_markers(canvas: &mut impl Canvas, nodes: &[Vec2], color: [f32; 4]) {
    for node in nodes {
        canvas.circle_outline(*node, NODE_MARKER_RADIUS, 1.0, color);
    }
}

/// Render a full frame of the world
pub fn render_world(canvas: &mut impl Canvas, world: &World, palette: &Palette, viewport: Vec2) {
    clear(canvas, viewport, palette.background);
    draw_grid(canvas, &world.arena, palette.grid_fill, palette.grid_line);

    if world.show_nodes {
        for nodes in world.closest_nodes() {
            draw_node_markers(canvas, &nodes, palette.node_marker);
        }
    }

    for block in &world.blocks {
        block.draw(canvas);
    }
}
