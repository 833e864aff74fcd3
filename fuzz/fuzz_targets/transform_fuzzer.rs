//! Fuzz target for the width transforms and combinators
//!
//! # Invariants
//!
//! - 120 -> 88 inverts 88 -> 120
//! - Parity expansions keep every data byte in place
//! - TB4 is its own inverse

#![no_main]

use libfuzzer_sys::fuzz_target;
use tetra_crypto::{
    fixed, tb4, tb7, transform_80_to_120, transform_80_to_120_alt, transform_80_to_128,
    transform_80_to_128_alt, transform_88_to_120, transform_120_to_88,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = fixed::<11>(data.get(..11).unwrap_or_default()) {
        assert_eq!(transform_120_to_88(&transform_88_to_120(&input)), input);
    }

    let Ok(key) = fixed::<10>(data.get(..10).unwrap_or_default()) else {
        return;
    };
    let _ = transform_80_to_120(&key);
    let _ = transform_80_to_128(&key);

    let alt = transform_80_to_128_alt(&key);
    assert_eq!(alt[..15], transform_80_to_120_alt(&key));
    for (pair, chunk) in key.chunks_exact(2).zip(alt.chunks_exact(3)) {
        assert_eq!(&chunk[..2], pair);
    }

    let mask = fixed::<10>(data.get(10..20).unwrap_or_default()).unwrap_or([0xA5; 10]);
    assert_eq!(tb4(&tb4(&key, &mask), &mask), key);

    if let Ok(wide) = fixed::<12>(data.get(..12).unwrap_or_default()) {
        let framed = tb7(&wide);
        for (group, chunk) in wide.chunks_exact(3).zip(framed.chunks_exact(4)) {
            assert_eq!(&chunk[..3], group);
        }
    }
});
