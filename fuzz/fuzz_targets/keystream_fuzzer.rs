//! Fuzz target for the TEA keystream generators
//!
//! # Invariants
//!
//! - Keystream length always equals the requested length
//! - A shorter request is a prefix of a longer one
//! - Out-of-range frame numbers are rejected, in-range ones pack into an IV

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tetra_crypto::{FrameNumbers, LinkDirection, TeaAlgorithm};

#[derive(Debug, Arbitrary)]
struct KeystreamInput {
    timeslot: u8,
    frame: u8,
    multiframe: u8,
    hyperframe: u16,
    uplink: bool,
    key: [u8; 10],
    len: u8,
}

fuzz_target!(|input: KeystreamInput| {
    let direction = if input.uplink { LinkDirection::Uplink } else { LinkDirection::Downlink };
    let frame =
        FrameNumbers::new(input.timeslot, input.frame, input.multiframe, input.hyperframe, direction);

    let in_range = (1..=4).contains(&input.timeslot)
        && (1..=18).contains(&input.frame)
        && (1..=60).contains(&input.multiframe);
    assert_eq!(frame.is_ok(), in_range);

    let Ok(frame) = frame else {
        return;
    };
    let iv = frame.to_iv();
    assert_eq!(iv >> 28 == 1, input.uplink);

    let len = usize::from(input.len);
    for algorithm in [TeaAlgorithm::Tea1, TeaAlgorithm::Tea2, TeaAlgorithm::Tea3] {
        let generator = algorithm.generator();
        let long = generator.keystream(iv, &input.key, len);
        assert_eq!(long.len(), len);
        let short = generator.keystream(iv, &input.key, len / 2);
        assert_eq!(short[..], long[..len / 2]);
    }
});
