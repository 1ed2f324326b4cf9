use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bug_hunt::core::{GameRules, GameState, HelpCarousel};
use bug_hunt::term::{GameView, Viewport};

fn bench_click_round(c: &mut Criterion) {
    let rules = GameRules::standard();

    c.bench_function("click_win_reset_round", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for id in ["MITE", "MITE", "SLUG", "BEE"] {
                state = rules.handle_bug_click(&state, black_box(id)).unwrap().0;
            }
            state
        })
    });
}

fn bench_unknown_id(c: &mut Criterion) {
    let rules = GameRules::standard();
    let state = GameState::new();

    c.bench_function("click_unknown_id", |b| {
        b.iter(|| rules.handle_bug_click(&state, black_box("NONEXISTENT")).is_err())
    });
}

fn bench_carousel_walk(c: &mut Criterion) {
    c.bench_function("carousel_walk", |b| {
        b.iter(|| {
            let mut carousel = HelpCarousel::standard();
            for _ in 0..4 {
                carousel.page_up();
            }
            for _ in 0..4 {
                carousel.page_down();
            }
            carousel.index()
        })
    });
}

fn bench_render_game(c: &mut Criterion) {
    let rules = GameRules::standard();
    let (state, _) = rules.handle_bug_click(&GameState::new(), "MITE").unwrap();
    let view = GameView::default();
    let mut fb = bug_hunt::term::FrameBuffer::new(120, 40);

    c.bench_function("render_game_120x40", |b| {
        b.iter(|| {
            view.render_into(&rules.snapshot(&state), Viewport::new(120, 40), &mut fb);
            fb.fingerprint()
        })
    });
}

criterion_group!(
    benches,
    bench_click_round,
    bench_unknown_id,
    bench_carousel_walk,
    bench_render_game
);
criterion_main!(benches);
