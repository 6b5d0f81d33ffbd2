use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phrasetrain::list::codec;
use phrasetrain::list::{Languages, PhraseList};
use phrasetrain::session::{PracticeOptions, PracticeSession, SeededRandomizer};

fn make_lines(count: usize) -> Vec<String> {
    let mut lines = vec!["English:French".to_string()];
    for i in 0..count {
        if i % 10 == 0 {
            lines.push(format!("# section {i}"));
        }
        lines.push(format!("phrase number {i}:phrase numero {i}"));
    }
    lines
}

fn make_list(count: usize) -> PhraseList {
    let mut list = PhraseList::new("bench", Languages::new("English", "French"));
    for i in 0..count {
        list.add(&format!("phrase {i}"), &format!("phrase {i} fr"));
    }
    list
}

fn bench_decode(c: &mut Criterion) {
    let lines = make_lines(1000);
    c.bench_function("decode (1000 phrases)", |b| {
        b.iter(|| codec::decode(black_box(&lines)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let list = make_list(1000);
    c.bench_function("encode (1000 phrases)", |b| {
        b.iter(|| codec::encode(black_box(&list)))
    });
}

fn bench_session(c: &mut Criterion) {
    let list = make_list(500);
    let options = PracticeOptions {
        count: 100,
        randomize_direction: true,
        start_with_foreign: false,
    };
    c.bench_function("practice setup + drain (100 of 500)", |b| {
        b.iter(|| {
            let mut rng = SeededRandomizer::from_seed(9);
            let mut session = PracticeSession::setup(&list, options, &mut rng).unwrap();
            while session.next_question(&mut rng).is_some() {
                session.answer("wrong");
            }
            session.finish(&mut rng)
        })
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_session);
criterion_main!(benches);
