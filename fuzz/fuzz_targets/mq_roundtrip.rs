#![no_main]
use libfuzzer_sys::fuzz_target;
use mq::MqCoder;

fuzz_target!(|data: (Vec<u8>, bool)| {
    let (raw, easy) = data;

    if raw.is_empty() {
        return;
    }

    // Each input byte carries one bit and a context index.
    let ops: Vec<(bool, usize)> = raw
        .iter()
        .map(|&b| (b & 1 == 1, ((b >> 1) & 3) as usize))
        .collect();

    let mut coder = MqCoder::with_contexts(4);
    for &(bit, context) in &ops {
        coder.encode_bit_context(bit, context);
    }
    if easy {
        coder.terminate_easy().unwrap();
    } else {
        coder.terminate().unwrap();
    }
    let stream = coder.change_stream(None);

    // No marker pair may survive in the encoded segment.
    let bytes = stream.as_slice();
    for pair in bytes.windows(2) {
        assert!(pair[0] != 0xFF || pair[1] <= 0x8F);
    }

    let mut decoder = MqCoder::with_contexts(4);
    decoder.change_stream(Some(stream));
    decoder.restart_decoding().unwrap();
    decoder.reset();
    for &(bit, context) in &ops {
        assert_eq!(decoder.decode_bit_context(context).unwrap(), bit);
    }
});
