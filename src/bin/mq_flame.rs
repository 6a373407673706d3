use mq::MqCoder;

fn main() {
    let ops: Vec<(bool, usize)> = (0..10_000).map(|i| (i % 5 == 0, i % 8)).collect();

    for _ in 0..1000 {
        let mut coder = MqCoder::with_contexts(8);
        for &(bit, context) in &ops {
            coder.encode_bit_context(bit, context);
        }
        coder.terminate().unwrap();
        let stream = coder.change_stream(None);

        let mut decoder = MqCoder::with_contexts(8);
        decoder.change_stream(Some(stream));
        decoder.restart_decoding().unwrap();
        decoder.reset();
        for &(_, context) in &ops {
            decoder.decode_bit_context(context).unwrap();
        }
    }
}
