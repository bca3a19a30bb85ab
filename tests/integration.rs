//! Integration tests for peerwire.
//!
//! These tests exercise the public API the way a peer-exchange layer uses it.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use flate2::write::GzEncoder;
use flate2::Compression;
use peerwire::codec::{CompressionMode, EncodedBlock, ListCodec, ListCodecConfig};
use peerwire::util::{parse_host_port, parse_int64, parse_size, seconds_to_duration};
use peerwire::{ErrorKind, PeerwireError};
use proptest::prelude::*;

/// Size of the record the codec serializes for `strings`.
fn serialized_len(strings: &[String]) -> usize {
    serde_json::json!({ "strings": strings }).to_string().len()
}

/// Test the small-list scenario end to end.
#[test]
fn test_small_list_scenario() {
    let block = ListCodec::encode(&["a", "b", "c"], 1000).unwrap();
    assert_eq!(block.as_bytes()[0], 0);
    assert_eq!(
        ListCodec::decode(block.as_bytes()).unwrap(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

/// Test the large-list scenario: 10,000 long strings with a tiny threshold.
#[test]
fn test_large_list_scenario() {
    let long = "cluster.route.subject.".repeat(10);
    let list: Vec<String> = (0..10_000).map(|_| long.clone()).collect();

    let block = ListCodec::encode(&list, 10).unwrap();
    assert_eq!(block.as_bytes()[0], 1);
    assert!(block.len() < serialized_len(&list));

    let decoded = ListCodec::decode(block.as_bytes()).unwrap();
    assert_eq!(decoded.len(), 10_000);
    assert_eq!(decoded, list);
}

/// Test that the mode flips exactly one byte past the threshold.
#[test]
fn test_threshold_boundary_scenario() {
    let list = vec!["routes".to_string(), "".to_string(), "é".to_string()];
    let t = serialized_len(&list);

    let raw = ListCodec::encode(&list, t).unwrap();
    assert_eq!(raw.mode(), Some(CompressionMode::Raw));
    assert_eq!(raw.len(), t + 1);

    // Same list, one byte longer once serialized.
    let mut longer = list.clone();
    longer[1].push('x');
    assert_eq!(serialized_len(&longer), t + 1);
    let gz = ListCodec::encode(&longer, t).unwrap();
    assert_eq!(gz.mode(), Some(CompressionMode::Gzip));

    assert_eq!(ListCodec::decode(raw.as_bytes()).unwrap(), list);
    assert_eq!(ListCodec::decode(gz.as_bytes()).unwrap(), longer);
}

/// Test the decoder's rejection classes.
#[test]
fn test_rejections() {
    assert_eq!(ListCodec::decode(&[]).unwrap_err().kind(), ErrorKind::CorruptData);
    assert_eq!(ListCodec::decode(&[0]).unwrap_err().kind(), ErrorKind::CorruptData);
    assert_eq!(ListCodec::decode(&[1]).unwrap_err().kind(), ErrorKind::CorruptData);

    let err = ListCodec::decode(&[2, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, PeerwireError::UnknownEncoding(2)));

    let err = ListCodec::decode(b"\x00{\"strings\":").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

/// Test that a gzip stream cut in half is reported as a decompression error.
#[test]
fn test_truncated_gzip_stream() {
    let list: Vec<String> = (0..2_000).map(|i| format!("$G.route.{i}")).collect();
    let block = ListCodec::encode(&list, 0).unwrap();
    assert_eq!(block.mode(), Some(CompressionMode::Gzip));

    let stream = block.payload();
    let mut truncated = vec![1u8];
    truncated.extend_from_slice(&stream[..stream.len() / 2]);

    let err = ListCodec::decode(&truncated).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decompression);
}

/// Test that a gzip stream holding something other than the record is a
/// deserialization error, not a decompression error.
#[test]
fn test_gzip_of_wrong_record() {
    let mut encoder = GzEncoder::new(vec![1u8], Compression::default());
    encoder.write_all(br#"{"strings":{"a":1}}"#).unwrap();
    let block = encoder.finish().unwrap();

    let err = ListCodec::decode(&block).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialization);
}

/// Test blocks travelling as `Bytes` between encoder and decoder.
#[test]
fn test_block_through_bytes() {
    let list = vec!["x".to_string(); 300];
    let config = ListCodecConfig::new().with_compress_threshold(64);

    let bytes: bytes::Bytes = ListCodec::encode_with(&config, &list).unwrap().into();
    let received = EncodedBlock::from(bytes);
    assert_eq!(received.mode(), Some(CompressionMode::Gzip));
    assert_eq!(ListCodec::decode_block(&received).unwrap(), list);
}

/// Test that independent callers can encode and decode concurrently.
#[test]
fn test_concurrent_use() {
    let shared = Arc::new((0..1_000).map(|i| format!("subj.{i}")).collect::<Vec<_>>());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let list = Arc::clone(&shared);
            thread::spawn(move || {
                let threshold = if n % 2 == 0 { 0 } else { usize::MAX };
                for _ in 0..20 {
                    let block = ListCodec::encode(list.as_slice(), threshold).unwrap();
                    assert_eq!(ListCodec::decode(block.as_bytes()).unwrap(), *list);
                    // A bad block in this thread doesn't disturb the others.
                    assert!(ListCodec::decode(&[9, 9]).is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Test helpers as a config loader would chain them.
#[test]
fn test_config_helpers() {
    let hp = parse_host_port("0.0.0.0", 6222).unwrap();
    assert_eq!(hp.host, "0.0.0.0");
    assert_eq!(hp.port, 6222);

    assert_eq!(parse_size(b"65536"), 65536);
    assert_eq!(parse_int64(b"nope"), -1);
    assert_eq!(seconds_to_duration(0.5).as_millis(), 500);
}

proptest! {
    #[test]
    fn prop_round_trip(list in prop::collection::vec(".*", 0..40), threshold in 0usize..4096) {
        let block = ListCodec::encode(&list, threshold).unwrap();
        let expected = if serialized_len(&list) > threshold {
            CompressionMode::Gzip
        } else {
            CompressionMode::Raw
        };
        prop_assert_eq!(block.mode(), Some(expected));
        prop_assert_eq!(ListCodec::decode(block.as_bytes()).unwrap(), list);
    }

    #[test]
    fn prop_round_trip_duplicates(word in "[a-z.>*]{0,12}", count in 0usize..200, threshold in 0usize..512) {
        let list = vec![word; count];
        let block = ListCodec::encode(&list, threshold).unwrap();
        prop_assert_eq!(ListCodec::decode(block.as_bytes()).unwrap(), list);
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = ListCodec::decode(&bytes);
    }
}
