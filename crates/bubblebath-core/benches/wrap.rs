use bubblebath_core::textarea::TextArea;
use bubblebath_core::wrapping::wrap;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;

fn sample_line(words: usize) -> Vec<char> {
    let mut s = String::new();
    for i in 0..words {
        if i % 7 == 0 {
            s.push_str("日本語 ");
        } else {
            s.push_str("quick brown fox ");
        }
    }
    s.chars().collect()
}

fn bench_wrap_line(c: &mut Criterion) {
    let line = sample_line(200);
    c.bench_function("wrap/long_line/width_40", |b| {
        b.iter(|| black_box(wrap(black_box(&line), black_box(40)).len()))
    });
    c.bench_function("wrap/long_line/width_500", |b| {
        b.iter(|| black_box(wrap(black_box(&line), black_box(500)).len()))
    });
}

fn bench_text_area_view(c: &mut Criterion) {
    let text = (0..90)
        .map(|i| format!("line {i:02}: the quick brown fox jumps over the lazy dog"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut ta = TextArea::new();
    ta.set_char_limit(0);
    ta.resize(48, 20);
    ta.set_value(&text);
    ta.focus();

    c.bench_function("textarea/view/90_lines", |b| {
        b.iter(|| black_box(ta.view().lines.len()))
    });
    c.bench_function("textarea/move_up_down", |b| {
        b.iter(|| {
            ta.move_to_first_row();
            ta.move_to_last_row();
            black_box(ta.y_offset());
        })
    });
}

criterion_group!(benches, bench_wrap_line, bench_text_area_view);
criterion_main!(benches);
