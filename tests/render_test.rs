//! Diff rendering between consecutive game frames.

use tui_2048::core::{Board, GameState};
use tui_2048::term::{
    changed_runs, encode_diff_into, encode_full_into, GameView, TerminalRenderer, Viewport,
};
use tui_2048::types::Direction;

#[test]
fn test_slide_only_redraws_changed_runs() {
    let mut gs = GameState::new(3);
    gs.set_board(Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]));
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let before = view.render(&gs.snapshot(), vp);
    assert!(gs.slide(Direction::Left).accepted());
    let after = view.render(&gs.snapshot(), vp);

    let runs = changed_runs(&before, &after);
    assert!(!runs.is_empty());
    let dirty: usize = runs.iter().map(|r| r.len as usize).sum();
    assert!(dirty < 80 * 24 / 2, "diff touched {dirty} cells");

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    assert!(diff.len() < full.len());
}

#[test]
fn test_renderer_writes_nothing_for_unchanged_frames() {
    let gs = {
        let mut gs = GameState::new(7);
        gs.start();
        gs
    };
    let view = GameView::default();
    let vp = Viewport::new(40, 22);
    let mut term = TerminalRenderer::with_writer(Vec::new());

    let mut fb = view.render(&gs.snapshot(), vp);
    term.draw_swap(&mut fb).unwrap();
    let written = term.writer().len();

    view.render_into(&gs.snapshot(), vp, &mut fb);
    term.draw_swap(&mut fb).unwrap();
    assert_eq!(term.writer().len(), written);

    // After invalidation the whole frame is sent again.
    term.invalidate();
    view.render_into(&gs.snapshot(), vp, &mut fb);
    term.draw_swap(&mut fb).unwrap();
    assert_eq!(term.writer().len(), written * 2);
}
