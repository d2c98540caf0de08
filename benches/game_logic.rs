use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cuisenaire::core::{GameSession, ScriptedRods, SessionSnapshot};
use cuisenaire::term::{FrameBuffer, GameView, Overlays, Viewport};

fn scripted(lengths: &[u32]) -> GameSession<ScriptedRods> {
    GameSession::with_source(ScriptedRods::new(lengths.iter().copied()).unwrap())
}

fn bench_fill_row(c: &mut Criterion) {
    let mut session = scripted(&[3, 4, 9, 2, 1]);

    c.bench_function("fill_row_target_20", |b| {
        b.iter(|| {
            session.start(black_box(20)).unwrap();
            while session.is_running() {
                session.place_offered().unwrap();
            }
        })
    });
}

fn bench_discard(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start(10).unwrap();

    c.bench_function("discard", |b| {
        b.iter(|| {
            black_box(session.discard().unwrap());
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut session = scripted(&[1]);
    session.start(20).unwrap();
    for _ in 0..19 {
        session.place_offered().unwrap();
    }
    let mut snap = SessionSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = scripted(&[2, 3, 5]);
    session.start(20).unwrap();
    session.place_offered().unwrap();
    session.place_offered().unwrap();
    let snap = session.snapshot();

    let view = GameView::default();
    let overlays = Overlays::default();
    let mut fb = FrameBuffer::new(100, 40);

    c.bench_function("render_into_100x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &overlays, Viewport::new(100, 40), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_fill_row,
    bench_discard,
    bench_snapshot_into,
    bench_render
);
criterion_main!(benches);
