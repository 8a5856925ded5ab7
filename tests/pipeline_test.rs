use bwtmtf::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use bwtmtf::bwt_algorithms::circular_suffix::SuffixRanker;
use bwtmtf::compression::compress::{compress, encode_stage};
use bwtmtf::compression::decompress::{decode_stage, decompress};
use bwtmtf::tools::cli::{Mode, Output, Stage, TransformOpts};
use bwtmtf::tools::mtf::{mtf_decode, mtf_encode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE: &str = "It was the best of times, it was the worst of times, it was the age of wisdom, \
it was the age of foolishness, it was the epoch of belief, it was the epoch of incredulity, \
it was the season of Light, it was the season of Darkness, it was the spring of hope, \
it was the winter of despair.";

fn pseudo_random(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..alphabet) + b'a').collect()
}

fn samples() -> Vec<Vec<u8>> {
    vec![
        SAMPLE.as_bytes().to_vec(),
        vec![b'A'],
        vec![b'A'; 2],
        vec![b'A'; 257],
        "ABABABABABABABABABABABABABABABABABABABAB".as_bytes().to_vec(),
        "abcabcabcabcabcabcabcabcabcabcabcabcabcab".as_bytes().to_vec(),
        (0..=255_u8).collect(),
        pseudo_random(5_000, 2, 7),
        pseudo_random(5_000, 4, 11),
        pseudo_random(2_000, 26, 13),
    ]
}

#[test]
fn bwt_round_trip_test() {
    for data in samples() {
        let (key, bwt) = bwt_encode(&data).unwrap();
        assert_eq!(bwt.len(), data.len());
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);
    }
}

#[test]
fn random_blocks_round_trip_test() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..500 {
        let len = rng.gen_range(1..60);
        let alphabet = [1_u8, 2, 3, 26][rng.gen_range(0..4)];
        let data = pseudo_random(len, alphabet, rng.gen());
        let (key, bwt) = bwt_encode(&data).unwrap();
        let csa = SuffixRanker::build(&data).unwrap();
        assert_eq!(csa.index(key as usize).unwrap(), 0);
        assert_eq!(bwt_decode(key, &bwt).unwrap(), data);
        assert_eq!(mtf_decode(&mtf_encode(&data)), data);
    }
    // Full byte range, not just letters
    let mut bytes = vec![0_u8; 4_096];
    rng.fill(&mut bytes[..]);
    let encoded = encode_stage(Stage::Pipeline, &bytes).unwrap();
    assert_eq!(decode_stage(Stage::Pipeline, &encoded).unwrap(), bytes);
}

#[test]
fn mtf_round_trip_test() {
    for data in samples() {
        assert_eq!(mtf_decode(&mtf_encode(&data)), data);
    }
}

#[test]
fn sort_and_key_consistency_test() {
    for data in samples() {
        let csa = SuffixRanker::build(&data).unwrap();
        let n = data.len();
        let rotation = |k: usize| -> Vec<u8> { data[k..].iter().chain(&data[..k]).copied().collect() };
        for pair in csa.ranks().windows(2) {
            let (a, b) = (rotation(pair[0] as usize), rotation(pair[1] as usize));
            assert!(a < b || (a == b && pair[0] > pair[1]));
        }
        let (key, bwt) = bwt_encode(&data).unwrap();
        assert_eq!(csa.index(key as usize).unwrap(), 0);

        // Same multiset of bytes on both sides
        let mut sorted_in = data.clone();
        let mut sorted_out = bwt.clone();
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        assert_eq!(sorted_in, sorted_out);
        assert_eq!(csa.len(), n);
    }
}

#[test]
fn stage_round_trip_test() {
    for stage in [Stage::Bwt, Stage::Mtf, Stage::Pipeline] {
        for data in samples() {
            let encoded = encode_stage(stage, &data).unwrap();
            assert_eq!(decode_stage(stage, &encoded).unwrap(), data);
        }
    }
}

#[test]
fn pipeline_makes_small_ranks_test() {
    let encoded = encode_stage(Stage::Pipeline, SAMPLE.as_bytes()).unwrap();
    let zeros = encoded[4..].iter().filter(|&&r| r == 0).count();
    let zeros_before = SAMPLE.as_bytes().iter().filter(|&&b| b == 0).count();
    assert_eq!(zeros_before, 0);
    assert!(zeros > SAMPLE.len() / 5);
}

#[test]
fn file_round_trip_test() {
    let dir = std::env::temp_dir().join(format!("bwtmtf_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let plain = dir.join("plain.txt");
    let packed = dir.join("plain.bwt");
    let restored = dir.join("restored.txt");
    std::fs::write(&plain, SAMPLE).unwrap();

    let opts = TransformOpts {
        stage: Stage::Pipeline,
        op_mode: Mode::Encode,
        file: Some(plain.to_string_lossy().into_owned()),
        output: Output::File(packed.to_string_lossy().into_owned()),
        ..TransformOpts::default()
    };
    compress(&opts).unwrap();
    assert_eq!(std::fs::metadata(&packed).unwrap().len() as usize, SAMPLE.len() + 4);

    let opts = TransformOpts {
        stage: Stage::Pipeline,
        op_mode: Mode::Decode,
        file: Some(packed.to_string_lossy().into_owned()),
        output: Output::File(restored.to_string_lossy().into_owned()),
        ..TransformOpts::default()
    };
    decompress(&opts).unwrap();
    assert_eq!(std::fs::read(&restored).unwrap(), SAMPLE.as_bytes());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_test() {
    let opts = TransformOpts {
        file: Some("/nonexistent/bwtmtf/input".to_string()),
        ..TransformOpts::default()
    };
    assert!(matches!(
        compress(&opts),
        Err(bwtmtf::TransformError::Io(_))
    ));
}
