//! Integration tests for the adaptive dictionary codec.

use lzgamma_lz78::{
    CodecConfig, CodecError, Decoder, Encoder, MatchFinder, Token, compress, compress_bytes, compress_with,
    decompress, decompress_with,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn test_ten_a_scenario() {
    let compressed = compress("AAAAAAAAAA").expect("compression failed");
    assert_eq!(compressed.checksum, 650);

    let tokens = MatchFinder::tokenize(b"AAAAAAAAAA");
    assert_eq!(tokens[0].token, Token::Literal(b'A'));
    assert_eq!(tokens[0].code_width, 2);
    assert!(tokens.iter().any(|r| r.code_width == 3));

    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.checksum, 650);
    assert_eq!(decompressed.into_text(), "AAAAAAAAAA");
}

#[test]
fn test_empty_input() {
    let compressed = compress("").expect("compression failed");
    assert!(compressed.data.is_empty());
    assert_eq!(compressed.checksum, 0);

    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.checksum, 0);
    assert_eq!(decompressed.into_text(), "");
}

#[test]
fn test_pure_literal_path() {
    let original: Vec<u8> = (0..100).collect();
    let tokens = MatchFinder::tokenize(&original);
    assert_eq!(tokens.len(), 100);
    assert!(tokens.iter().all(|r| r.token.is_literal()));

    let compressed = compress_bytes(&original).expect("compression failed");
    assert_eq!(compressed.data.len(), (9 * 100usize).div_ceil(8));
    assert_eq!(compressed.data.len(), 113);

    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.data, original);
}

#[test]
fn test_code_width_growth() {
    let original = "AB".repeat(64);
    let compressed = compress(&original).expect("compression failed");

    let decoded = Decoder::default()
        .tokens(&compressed.data)
        .expect("decoding failed");
    let widths: BTreeSet<u8> = decoded.iter().map(|r| r.code_width).collect();
    assert!(widths.len() >= 3, "widths used: {:?}", widths);
    assert!(widths.contains(&2) && widths.contains(&3) && widths.contains(&4));

    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.into_text(), original);
}

#[test]
fn test_repetitive_input_compresses() {
    let original = "This is a test of compression! ".repeat(40);
    let compressed = compress(&original).expect("compression failed");
    assert!(compressed.data.len() < original.len() / 2);

    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.into_text(), original);
}

#[test]
fn test_all_byte_values() {
    let original: Vec<u8> = (0..=255).chain((0..=255).rev()).collect();
    let compressed = compress_bytes(&original).expect("compression failed");
    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.data, original);
    assert_eq!(decompressed.checksum, compressed.checksum);
}

#[test]
fn test_large_input_across_chunks() {
    let original = "The quick brown fox jumps over the lazy dog. ".repeat(200);
    let config = CodecConfig::with_chunk_size(64);
    let compressed = compress_with(&original, &config).expect("compression failed");
    assert_eq!(compressed, compress(&original).expect("compression failed"));

    let decompressed = decompress_with(&compressed.data, &config).expect("decompression failed");
    assert_eq!(decompressed.into_text(), original);
}

#[test]
fn test_trailing_zero_bytes_after_literal_zero() {
    // A literal NUL is nine zero bits and must not be mistaken for padding
    let original = [0u8, 0, 0];
    let compressed = compress_bytes(&original).expect("compression failed");
    let decompressed = decompress(&compressed.data).expect("decompression failed");
    assert_eq!(decompressed.data, original);
}

#[test]
fn test_truncated_stream_is_an_error() {
    let compressed = compress_bytes(&(0u8..50).collect::<Vec<_>>()).expect("compression failed");
    let cut = &compressed.data[..compressed.data.len() / 2];
    // Every token is a literal starting on a 9-bit boundary, so half the
    // stream ends mid-token.
    let err = decompress(cut).unwrap_err();
    assert!(matches!(err, CodecError::TruncatedInput { .. }));
}

#[test]
fn test_non_latin1_rejected() {
    let err = compress("snowman ☃").unwrap_err();
    assert_eq!(
        err,
        CodecError::NonAsciiCharacter {
            code_point: 0x2603,
            offset: 8
        }
    );
}

#[test]
fn test_checksum_is_order_insensitive() {
    let a = compress("compression").expect("compression failed");
    let b = compress("noisserpmoc").expect("compression failed");
    assert_eq!(a.checksum, b.checksum);
    assert_ne!(a.data, b.data);
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let compressed = compress_bytes(&data).unwrap();
        let decompressed = decompress(&compressed.data).unwrap();
        prop_assert_eq!(&decompressed.data, &data);
        prop_assert_eq!(decompressed.checksum, compressed.checksum);
    }

    #[test]
    fn prop_roundtrip_small_alphabet(data in proptest::collection::vec(0u8..4, 0..4096)) {
        let compressed = compress_bytes(&data).unwrap();
        let decompressed = decompress(&compressed.data).unwrap();
        prop_assert_eq!(decompressed.data, data);
    }

    #[test]
    fn prop_roundtrip_text(text in "[\\x00-\\xff]{0,512}") {
        let compressed = compress(&text).unwrap();
        let decompressed = decompress(&compressed.data).unwrap();
        prop_assert_eq!(decompressed.into_text(), text);
    }

    #[test]
    fn prop_checksum_permutation(
        (data, perm) in proptest::collection::vec(any::<u8>(), 0..512)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = compress_bytes(&data).unwrap();
        let b = compress_bytes(&perm).unwrap();
        prop_assert_eq!(a.checksum, b.checksum);
    }

    #[test]
    fn prop_chunk_size_invariant(
        data in proptest::collection::vec(0u8..8, 0..1024),
        chunk_size in 1usize..300,
    ) {
        let config = CodecConfig::with_chunk_size(chunk_size);
        let chunked = Encoder::new(config).unwrap().encode(&data).unwrap();
        prop_assert_eq!(&chunked, &compress_bytes(&data).unwrap());
        let decoded = Decoder::new(config).unwrap().decode(&chunked.data).unwrap();
        prop_assert_eq!(decoded.data, data);
    }

    #[test]
    fn prop_text_chunk_size_invariant(
        text in "[a-c\\xe0-\\xe2]{0,600}",
        chunk_size in 1usize..64,
    ) {
        let config = CodecConfig::with_chunk_size(chunk_size);
        prop_assert_eq!(
            compress_with(&text, &config).unwrap(),
            compress(&text).unwrap()
        );
    }

    #[test]
    fn prop_positions_fit_code_width(data in proptest::collection::vec(0u8..3, 0..2048)) {
        for record in MatchFinder::tokenize(&data) {
            if let Token::BackReference { position, .. } = record.token {
                prop_assert!(position >= 1);
                prop_assert!(position < 1u64 << record.code_width);
            }
        }
    }

    #[test]
    fn prop_arbitrary_stream_never_panics(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        // Garbage either decodes to something or reports an error
        if let Ok(decompressed) = decompress(&data) {
            let sum: u64 = decompressed.data.iter().map(|&b| u64::from(b)).sum();
            prop_assert_eq!(decompressed.checksum, sum);
        }
    }
}
