use criterion::{criterion_group, criterion_main, Criterion};
use mq::{prob0_to_mq, ByteStream, MqCoder};

fn test_bits(len: usize) -> Vec<(bool, usize)> {
    // Mildly compressible pattern over 8 contexts.
    (0..len).map(|i| (i % 5 == 0, i % 8)).collect()
}

fn bench_mq_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("mq_context");
    let ops = test_bits(10_000);

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut coder = MqCoder::with_contexts(8);
            for &(bit, context) in &ops {
                coder.encode_bit_context(bit, context);
            }
            coder.terminate().unwrap();
            coder.change_stream(None)
        })
    });

    let mut coder = MqCoder::with_contexts(8);
    for &(bit, context) in &ops {
        coder.encode_bit_context(bit, context);
    }
    coder.terminate().unwrap();
    let stream = coder.change_stream(None);

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = MqCoder::with_contexts(8);
            decoder.change_stream(Some(stream.clone()));
            decoder.restart_decoding().unwrap();
            decoder.reset();
            for &(_, context) in &ops {
                decoder.decode_bit_context(context).unwrap();
            }
        })
    });
}

fn bench_mq_prob(c: &mut Criterion) {
    let mut group = c.benchmark_group("mq_prob");
    let prob0 = prob0_to_mq(0.8);
    let bits: Vec<bool> = (0..10_000).map(|i| i % 4 == 0).collect();

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut coder = MqCoder::new();
            for &bit in &bits {
                coder.encode_bit_prob(bit, prob0);
            }
            coder.terminate().unwrap();
            coder.change_stream(None)
        })
    });

    let mut coder = MqCoder::new();
    for &bit in &bits {
        coder.encode_bit_prob(bit, prob0);
    }
    coder.terminate().unwrap();
    let stream: ByteStream = coder.change_stream(None);

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = MqCoder::new();
            decoder.change_stream(Some(stream.clone()));
            decoder.restart_decoding().unwrap();
            for _ in 0..bits.len() {
                decoder.decode_bit_prob(prob0).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_mq_context, bench_mq_prob);
criterion_main!(benches);
