use egui::{Color32, Pos2};
use festive_board::{BoardState, Point, RasterSurface, Renderer, Surface};

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Circle { center: Pos2, radius: f32, color: Color32 },
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(Op::Circle { center, radius, color });
    }
}

fn sample_board() -> BoardState {
    let mut board = BoardState::default();
    board.append_point(Point::new(Pos2::new(10.0, 10.0), Color32::RED, 5.0));
    board.append_point(Point::new(Pos2::new(20.0, 12.0), Color32::BLUE, 8.0));
    board.append_point(Point::new(Pos2::new(12.0, 11.0), Color32::GREEN, 20.0));
    board
}

#[test]
fn test_render_clears_then_paints_in_order() {
    let board = sample_board();
    let mut surface = RecordingSurface::default();
    Renderer::draw_points(&mut surface, board.points());

    assert_eq!(
        surface.ops,
        vec![
            Op::Clear,
            Op::Circle { center: Pos2::new(10.0, 10.0), radius: 2.5, color: Color32::RED },
            Op::Circle { center: Pos2::new(20.0, 12.0), radius: 4.0, color: Color32::BLUE },
            Op::Circle { center: Pos2::new(12.0, 11.0), radius: 10.0, color: Color32::GREEN },
        ]
    );
}

#[test]
fn test_rerender_gives_identical_pixels() {
    let board = sample_board();
    let mut surface = RasterSurface::new(64, 48, Color32::WHITE);

    Renderer::draw_points(&mut surface, board.points());
    let first = surface.image().clone();
    Renderer::draw_points(&mut surface, board.points());
    Renderer::draw_points(&mut surface, board.points());

    assert_eq!(surface.image(), &first);
}

#[test]
fn test_undo_rerender_matches_fresh_render() {
    let mut board = sample_board();
    let mut surface = RasterSurface::new(64, 48, Color32::WHITE);
    Renderer::draw_points(&mut surface, board.points());

    board.undo();
    Renderer::draw_points(&mut surface, board.points());

    let mut fresh = RasterSurface::new(64, 48, Color32::WHITE);
    Renderer::draw_points(&mut fresh, &board.points()[..]);
    assert_eq!(surface.image(), fresh.image());
}

#[test]
fn test_render_after_clear_is_blank() {
    let mut board = sample_board();
    let mut surface = RasterSurface::new(32, 32, Color32::WHITE);
    Renderer::draw_points(&mut surface, board.points());
    assert_ne!(surface.pixel(10, 10), [255, 255, 255, 255]);

    board.clear();
    Renderer::draw_points(&mut surface, board.points());
    assert!(surface.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
