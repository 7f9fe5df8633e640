use criterion::{
    BatchSize, Criterion, black_box, criterion_group, criterion_main,
};
use vtscan::{Actor, Parser};

#[derive(Default)]
struct NullActor {
    cells: usize,
    executes: usize,
}

impl Actor for NullActor {
    fn print_text(&mut self, _text: &str, cell_count: usize) {
        self.cells += cell_count;
    }

    fn print(&mut self, _ch: char) {
        self.cells += 1;
    }

    fn execute(&mut self, _byte: u8) {
        self.executes += 1;
    }
}

fn bench_plain_text(c: &mut Criterion) {
    let payload = b"the quick brown fox jumps over the lazy dog\n".repeat(200);

    c.bench_function("parse_plain_text", |b| {
        b.iter_batched(
            || (Parser::new(), NullActor::default()),
            |(mut parser, mut actor)| {
                parser.parse_fragment(black_box(&payload), &mut actor);
                black_box(actor.cells);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_unicode_text(c: &mut Criterion) {
    let payload = "der schnelle braune Fuchs, 素早い茶色の狐\n"
        .repeat(200)
        .into_bytes();

    c.bench_function("parse_unicode_text", |b| {
        b.iter_batched(
            || (Parser::new(), NullActor::default()),
            |(mut parser, mut actor)| {
                parser.parse_fragment(black_box(&payload), &mut actor);
                black_box(actor.cells);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_sgr_stream(c: &mut Criterion) {
    let payload = b"hello world\x1b[31m colored\x1b[0m\n".repeat(200);

    c.bench_function("parse_sgr_stream", |b| {
        b.iter_batched(
            || (Parser::new(), NullActor::default()),
            |(mut parser, mut actor)| {
                parser.parse_fragment(black_box(&payload), &mut actor);
                black_box(actor.cells);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_osc_dcs_stream(c: &mut Criterion) {
    let payload =
        b"\x1b]0;build 42 running\x07\x1bPq#0;2;0;0;0-~~@@vv@@~~\x1b\\"
            .repeat(100);

    c.bench_function("parse_osc_dcs_stream", |b| {
        b.iter_batched(
            || (Parser::new(), NullActor::default()),
            |(mut parser, mut actor)| {
                parser.parse_fragment(black_box(&payload), &mut actor);
                black_box(actor.executes);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    parser,
    bench_plain_text,
    bench_unicode_text,
    bench_sgr_stream,
    bench_osc_dcs_stream
);
criterion_main!(parser);
