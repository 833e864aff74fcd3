//! Built-in suites, one per primitive family.

use tetra_crypto::{
    CryptoError, Hurdle, ta11, ta21, ta31, ta32, ta51, ta52, ta71, ta81, ta82, ta91,
    ta92, tb4, tb5, tb6, tb7, tea1, tea2, tea3, transform_80_to_120_alt, transform_80_to_128,
    transform_80_to_128_alt, transform_88_to_120, transform_120_to_88,
};

use super::Suite;
use crate::{
    error::{HarnessError, hex_array},
    report::{CaseFailure, CaseResult, compare},
    vectors::{self, KeystreamVector},
};

type Check = fn() -> Result<Vec<CaseResult>, HarnessError>;

/// A suite backed by a static vector table.
#[derive(Clone, Copy)]
pub struct TableSuite {
    name: &'static str,
    check: Check,
}

impl TableSuite {
    const fn new(name: &'static str, check: Check) -> Self {
        Self { name, check }
    }
}

impl Suite for TableSuite {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> Result<Vec<CaseResult>, HarnessError> {
        (self.check)()
    }
}

/// Every built-in suite, leaves first.
pub fn standard_suites() -> [TableSuite; 15] {
    let suite = TableSuite::new;
    [
        suite("transforms", transforms),
        suite("tb4", check_tb4),
        suite("tb5", check_tb5),
        suite("tb6", check_tb6),
        suite("tb7", check_tb7),
        suite("hurdle", check_hurdle),
        suite("tea1", || keystream(vectors::TEA1, tea1)),
        suite("tea2", || keystream(vectors::TEA2, tea2)),
        suite("tea3", || keystream(vectors::TEA3, tea3)),
        suite("ta11_ta21", check_ta11_ta21),
        suite("ta31_ta32", check_ta31_ta32),
        suite("ta51_ta52", check_ta51_ta52),
        suite("ta71", check_ta71),
        suite("ta81_ta82", check_ta81_ta82),
        suite("ta91_ta92", check_ta91_ta92),
    ]
}

fn transforms() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (input, expected) in vectors::TRANSFORM_80_TO_120_ALT {
        let actual = transform_80_to_120_alt(&hex_array(input)?);
        cases.push(compare(cases.len(), "80->120 alt", &hex_array::<15>(expected)?, &actual));
    }
    for (input, expected) in vectors::TRANSFORM_88_TO_120 {
        let actual = transform_88_to_120(&hex_array(input)?);
        cases.push(compare(cases.len(), "88->120", &hex_array::<15>(expected)?, &actual));
    }
    for (input, expected) in vectors::TRANSFORM_80_TO_128 {
        let actual = transform_80_to_128(&hex_array(input)?);
        cases.push(compare(cases.len(), "80->128", &hex_array::<16>(expected)?, &actual));
    }
    for (input, expected) in vectors::TRANSFORM_120_TO_88 {
        let actual = transform_120_to_88(&hex_array(input)?);
        cases.push(compare(cases.len(), "120->88", &hex_array::<11>(expected)?, &actual));
    }
    for (input, expected) in vectors::TRANSFORM_80_TO_128_ALT {
        let actual = transform_80_to_128_alt(&hex_array(input)?);
        cases.push(compare(cases.len(), "80->128 alt", &hex_array::<16>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_tb4() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (first, second, expected)) in vectors::TB4.iter().enumerate() {
        let actual = tb4(&hex_array(first)?, &hex_array(second)?);
        cases.push(compare(case, "DCK", &hex_array::<10>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_tb5() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (cn, la, cc, ck, expected)) in vectors::TB5.iter().enumerate() {
        let actual = tb5(&hex_array(cn)?, &hex_array(la)?, &hex_array(cc)?, &hex_array(ck)?);
        cases.push(compare(case, "ECK", &hex_array::<10>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_tb6() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (sck, cn, ssi, expected)) in vectors::TB6.iter().enumerate() {
        let actual = tb6(&hex_array(sck)?, &hex_array(cn)?, &hex_array(ssi)?);
        cases.push(compare(case, "ESCK", &hex_array::<10>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_tb7() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (input, expected)) in vectors::TB7.iter().enumerate() {
        let actual = tb7(&hex_array(input)?);
        cases.push(compare(case, "TB7", &hex_array::<16>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_hurdle() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (key, plain, cipher)) in vectors::HURDLE.iter().enumerate() {
        let hurdle = Hurdle::new(&hex_array(key)?);
        let plain = hex_array::<8>(plain)?;
        let cipher = hex_array::<8>(cipher)?;
        cases.push(
            compare(case, "encrypt", &cipher, &hurdle.encrypt_block(&plain))
                .and_then(|()| compare(case, "decrypt", &plain, &hurdle.decrypt_block(&cipher))),
        );
    }
    Ok(cases)
}

fn keystream(
    table: &[KeystreamVector],
    generate: fn(u32, &[u8; 10], usize) -> Vec<u8>,
) -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (iv, key, expected)) in table.iter().enumerate() {
        let expected = hex::decode(expected)?;
        let actual = generate(*iv, &hex_array(key)?, expected.len());
        cases.push(compare(case, "keystream", &expected, &actual));
    }
    Ok(cases)
}

fn check_ta11_ta21() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (k, rand, expected_ta11, expected_ta21)) in vectors::TA11_TA21.iter().enumerate() {
        let k = hex_array(k)?;
        let rand = hex_array(rand)?;
        let ta11_expected = hex_array::<16>(expected_ta11)?;
        let ta21_expected = hex_array::<16>(expected_ta21)?;
        cases.push(
            compare(case, "TA11", &ta11_expected, &ta11(&k, &rand))
                .and_then(|()| compare(case, "TA21", &ta21_expected, &ta21(&k, &rand))),
        );
    }
    Ok(cases)
}

fn check_ta31_ta32() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (cck, cck_id, dck, sealed)) in vectors::TA31_TA32.iter().enumerate() {
        let cck = hex_array::<10>(cck)?;
        let cck_id = hex_array(cck_id)?;
        let dck = hex_array(dck)?;
        let sealed = hex_array::<15>(sealed)?;
        cases.push(compare(case, "TA31", &sealed, &ta31(&cck, &cck_id, &dck)).and_then(|()| {
            accepted(case, "TA32", &cck, ta32(&sealed, &cck_id, &dck).accept())
        }));
    }
    Ok(cases)
}

fn check_ta51_ta52() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (payload, vn, k, key_index, sealed)) in vectors::TA51_TA52.iter().enumerate() {
        let payload = hex_array::<10>(payload)?;
        let vn = hex_array(vn)?;
        let k = hex_array(k)?;
        let sealed = hex_array::<15>(sealed)?;
        let unsealed = ta52(&sealed, &k, &vn).verify(*key_index).accept().map(|(key, _)| key);
        cases.push(
            compare(case, "TA51", &sealed, &ta51(&payload, &vn, &k, *key_index))
                .and_then(|()| accepted(case, "TA52", &payload, unsealed)),
        );
    }
    Ok(cases)
}

fn check_ta71() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (gck, cck, expected)) in vectors::TA71.iter().enumerate() {
        let actual = ta71(&hex_array(gck)?, &hex_array(cck)?);
        cases.push(compare(case, "MGCK", &hex_array::<10>(expected)?, &actual));
    }
    Ok(cases)
}

fn check_ta81_ta82() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (gck, vn, gck_n, k, sealed)) in vectors::TA81_TA82.iter().enumerate() {
        let gck = hex_array::<10>(gck)?;
        let vn = hex_array(vn)?;
        let gck_n = hex_array(gck_n)?;
        let k = hex_array(k)?;
        let sealed = hex_array::<15>(sealed)?;
        let unsealed = ta82(&sealed, &vn, &k).verify(&gck_n).accept().map(|(key, _)| key);
        cases.push(
            compare(case, "TA81", &sealed, &ta81(&gck, &vn, &gck_n, &k))
                .and_then(|()| accepted(case, "TA82", &gck, unsealed)),
        );
    }
    Ok(cases)
}

fn check_ta91_ta92() -> Result<Vec<CaseResult>, HarnessError> {
    let mut cases = Vec::new();
    for (case, (gsko, vn, k, sealed)) in vectors::TA91_TA92.iter().enumerate() {
        let gsko = hex_array::<12>(gsko)?;
        let vn = hex_array(vn)?;
        let k = hex_array(k)?;
        let sealed = hex_array::<15>(sealed)?;
        cases.push(compare(case, "TA91", &sealed, &ta91(&gsko, &vn, &k)).and_then(|()| {
            accepted(case, "TA92", &gsko, ta92(&sealed, &vn, &k).accept())
        }));
    }
    Ok(cases)
}

fn accepted<const N: usize>(
    case: usize,
    label: &str,
    expected: &[u8; N],
    unsealed: Result<[u8; N], CryptoError>,
) -> CaseResult {
    match unsealed {
        Ok(payload) => compare(case, label, expected, &payload),
        Err(err) => Err(CaseFailure { case, message: err.to_string() }),
    }
}
