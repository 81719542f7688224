use criterion::{black_box, criterion_group, criterion_main, Criterion};
use klondike_engine::{EngineConfig, GameEngine, HistoryManager};

fn mid_game() -> GameEngine {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(7));
    for _ in 0..12 {
        engine.release_draw_guard();
        engine.draw();
        if let Some(&request) = engine.legal_moves().first() {
            engine.move_cards(request);
        }
    }
    engine
}

fn bench_state_clone(c: &mut Criterion) {
    let engine = mid_game();
    let state = engine.state().clone();

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));

    c.bench_function("history_save_100", |b| {
        b.iter(|| {
            let mut history = HistoryManager::new();
            for _ in 0..100 {
                history.save(black_box(&state));
            }
            history
        })
    });

    c.bench_function("legal_moves", |b| b.iter(|| black_box(engine.legal_moves())));
}

criterion_group!(benches, bench_state_clone);
criterion_main!(benches);
