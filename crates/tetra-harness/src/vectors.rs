//! Conformance vector tables
//!
//! Hex fixtures for every primitive, one table per algorithm. Field order in
//! each tuple follows the argument order of the primitive, with the expected
//! output last.

/// Width transform vectors: input, expected output.
pub type TransformVector = (&'static str, &'static str);

/// 80 -> 120 expansion with pair parity.
pub const TRANSFORM_80_TO_120_ALT: &[TransformVector] = &[
    ("456789ABCDEFAABBCCDD", "45672289AB22CDEF22AABB11CCDD11"),
    ("E8D47CA2EDAE0CFBF0BA", "E8D43C7CA2DEEDAE430CFBF7F0BA4A"),
    ("C56175BFBE356891E229", "C561A475BFCABE358B6891F9E229CB"),
    ("0696E83D166089892EC8", "069690E83DD51660768989002EC8E6"),
    ("4A1E249304EFC2F95CBC", "4A1E542493B704EFEBC2F93B5CBCE0"),
    ("FFDBFBCD890CF79D224E", "FFDB24FBCD36890C85F79D6A224E6C"),
];

/// 88 -> 120 expansion.
pub const TRANSFORM_88_TO_120: &[TransformVector] = &[
    ("23456789ABCDEFAABBCCDD", "2345666789AB45CDEFAA88BBCCDDAA"),
    ("F8E8D47CA2EDAE0CFBF0BA", "F8E810D47CA20AEDAE0C4FFBF0BAB1"),
    ("41C56175BFBE356891E229", "41C5846175BFABBE3568E391E2295A"),
    ("3E0696E83D166089892EC8", "3E063896E83D43166089FF892EC86F"),
    ("384A1E249304EFC2F95CBC", "384A721E2493A904EFC229F95CBC19"),
    ("87FFDBFBCD890CF79D224E", "87FF78DBFBCDED890CF7729D224EF1"),
];

/// 80 -> 128 expansion.
pub const TRANSFORM_80_TO_128: &[TransformVector] = &[
    ("456789ABCDEFAABBCCDD", "BC2245DD3367CC4489BB55ABAABCCDEF"),
    ("E8D47CA2EDAE0CFBF0BA", "24A2E8BAC4D4F0777CFBAEA20C9BEDAE"),
    ("C56175BFBE356891E229", "7FEEC5294361E206759127BF68F3BE35"),
    ("0696E83D166089892EC8", "CBCE06C8C4962E71E889C63D89761660"),
    ("4A1E249304EFC2F95CBC", "C7064ABC7A1E5C1D24F95593C2F304EF"),
    ("FFDBFBCD890CF79D224E", "794DFF4EFDDB2298FB9DC4CDF795890C"),
];

/// 120 -> 88 reduction.
pub const TRANSFORM_120_TO_88: &[TransformVector] = &[
    ("23456789ABCDEFAABBCCDDBC2245DD", "234589ABCDAABBCCBC2245"),
    ("F8E8D47CA2EDAE0CFBF0BAE83D1660", "F8E87CA2ED0CFBF0E83D16"),
    ("41C56175BFBE356891E229F79D224E", "41C575BFBE6891E2F79D22"),
    ("3E0696E83D166089892EC85787FFDB", "3E06E83D1689892E5787FF"),
    ("384A1E249304EFC2F95CBC89ABCDEF", "384A249304C2F95C89ABCD"),
    ("87FFDBFBCD890CF79D224E0CFBF0BA", "87FFFBCD89F79D220CFBF0"),
];

/// 80 -> 128 expansion with pair parity.
pub const TRANSFORM_80_TO_128_ALT: &[TransformVector] = &[
    ("456789ABCDEFAABBCCDD", "45672289AB22CDEF22AABB11CCDD1188"),
    ("E8D47CA2EDAE0CFBF0BA", "E8D43C7CA2DEEDAE430CFBF7F0BA4A9E"),
    ("C56175BFBE356891E229", "C561A475BFCABE358B6891F9E229CBBD"),
    ("0696E83D166089892EC8", "069690E83DD51660768989002EC8E6C1"),
    ("4A1E249304EFC2F95CBC", "4A1E542493B704EFEBC2F93B5CBCE011"),
    ("FFDBFBCD890CF79D224E", "FFDB24FBCD36890C85F79D6A224E6CB5"),
];

/// TB4: first key, second key, combined key.
pub const TB4: &[(&str, &str, &str)] = &[
    ("0123456789ABCDEFAABB", "0123456789ABCDEFAABB", "00000000000000000000"),
    ("BDF8E8D47CA2EDAE0CFB", "563B92C2A2275A0F6113", "EBC37A16DE85B7A16DE8"),
    ("8A41C56175BFBE356891", "2DCAB883AAC709EB4566", "A78B7DE2DF78B7DE2DF7"),
    ("BA3E0696E83D16608989", "9A87D3699D42CB3F7EDE", "20B9D5FF757FDD5FF757"),
];

/// TB5: carrier number, location area, colour code, CK, ECK.
pub const TB5: &[(&str, &str, &str, &str, &str)] = &[
    ("02BC", "1DCC", "05", "0123456789ABCDEFAABB", "7613EA62A26A871FF807"),
    ("0DE8", "3AF0", "16", "BDF8E8D47CA2EDAE0CFB", "563B92C2A2275A0F6113"),
    ("0DF7", "29E2", "22", "8A41C56175BFBE356891", "2DCAB883AAC709EB4566"),
    ("0757", "082E", "3F", "BA3E0696E83D16608989", "9A87D3699D42CB3F7EDE"),
];

/// TB6: SCK, carrier number, SSI, ESCK.
pub const TB6: &[(&str, &str, &str, &str)] = &[
    ("0123456789ABCDEFAABB", "02BC", "1DCC05", "2AE299A7DB17D023AFBE"),
    ("BDF8E8D47CA2EDAE0CFB", "0DE8", "3AF016", "637B47D5114AD75E1AED"),
    ("8A41C56175BFBE356891", "0DF7", "29E222", "55335B43584897D74AB3"),
    ("BA3E0696E83D16608989", "0757", "082E3F", "CF4E84751F6A1E4EB6B6"),
];

/// TB7: 96-bit input, 128-bit output.
pub const TB7: &[TransformVector] = &[
    ("0123456789ABCDEFAABB02BC", "012345676789AB45CDEFAA88BB02BC05"),
    ("BDF8E8D47CA2EDAE0CFB0DE8", "BDF8E8ADD47CA20AEDAE0C4FFB0DE81E"),
    ("8A41C56175BFBE3568910DF7", "8A41C50E6175BFABBE3568E3910DF76B"),
    ("BA3E0696E83D166089890757", "BA3E068296E83D43166089FF890757D9"),
];

/// HURDLE: key, plaintext block, ciphertext block.
pub const HURDLE: &[(&str, &str, &str)] = &[
    ("ABCDEF12C001F00DDEADBEEFCAFEBABE", "CAFEBABEDEADBEEF", "4BF15508812E06F0"),
    ("99990099991188992277993366994455", "222266662222EEEE", "B4DA6698D36B1652"),
];

/// Keystream vectors: IV, key, first keystream bytes.
pub type KeystreamVector = (u32, &'static str, &'static str);

/// TEA1 keystream.
pub const TEA1: &[KeystreamVector] = &[
    (0x1111_1111, "00000000000000000000", "D33FD8A605A0A1BB9023"),
    (0x0123_4567, "A79839E4BA88EE54A029", "1DEC9C7EC6223D87C2CC"),
];

/// TEA2 keystream.
pub const TEA2: &[KeystreamVector] = &[
    (0x1234_5678, "00000000000000000000", "A79839E4BA88EE54A029"),
    (0x1234_5678, "112233445566778899AA", "64704EA9D7DC25608139"),
];

/// TEA3 keystream.
pub const TEA3: &[KeystreamVector] = &[
    (0x1111_1111, "00000000000000000000", "06A6588C5D9A996DD25E"),
    (0x0123_4567, "A79839E4BA88EE54A029", "02491EF557C51C17730C"),
];

/// TA11/TA21: K, RAND, TA11 output, TA21 output.
pub const TA11_TA21: &[(&str, &str, &str, &str)] = &[
    (
        "77E79FEE7FC654DC6544644FDF476815",
        "00000000000000000000",
        "9C8451A35695D33C3094371202485453",
        "9C8451A35695D33C3094371202485453",
    ),
    (
        "C62E22850340BCEB5552222860173D7E",
        "565A72D63CCEED0B6F30",
        "77BC47F65C87C1E749B74FDEA6B54661",
        "FCFAF45592DFC65D8A1F5C45DCA293DA",
    ),
    (
        "4EBB689D874AD6417905C0EDAA3F90EC",
        "935E49FCDCBB47581955",
        "489C79EA052FDEFA902A833F26CF127C",
        "5E4C241E21915A4807052942AF14ACCD",
    ),
    (
        "67FB134DD79C7D77F52A5DCEF23DE6FD",
        "B824FFB137A4EF87E07A",
        "B71421BA11CFD54AD6C4D257925A53B2",
        "AD310AEF61B06B2A6C8330C6145B7FEE",
    ),
];

/// TA31/TA32: CCK, CCK identifier, DCK, sealed CCK.
pub const TA31_TA32: &[(&str, &str, &str, &str)] = &[
    ("00000000000000000000", "6B18", "5FB0442F4B5EE2F0EA91", "A34885FC277D8D9611D40E22400A14"),
    ("7D33968EF5B5343D3D0E", "B2E3", "084AC4809156CE544CB2", "BBE6F1BC44850BC7353CBBB4AF5B39"),
    ("39EC0E26F227EFF7648F", "A086", "FDAFC21CC865A7A085EC", "BB07EBB67817A2C0EFA9E33CBC7B7B"),
    ("D6075E8E93D95014C375", "2286", "FC4CA2297FBAF0962E5B", "18E090004AC3BD2CC1453A338F16D3"),
];

/// TA51/TA52: key, version number, K, key index, sealed key.
pub const TA51_TA52: &[(&str, &str, &str, u8, &str)] = &[
    (
        "00000000000000000000",
        "0F6D",
        "77E79FEE7FC654DC6544644FDF476815",
        0x0F,
        "083D05A78E86FD5F46D62B28422B0B",
    ),
    (
        "565A72D63CCEED0B6F30",
        "790A",
        "C62E22850340BCEB5552222860173D7E",
        0x1B,
        "90B1EF3ACE5CAD1A872A7539BCCAA4",
    ),
    (
        "935E49FCDCBB47581955",
        "60AB",
        "4EBB689D874AD6417905C0EDAA3F90EC",
        0x13,
        "2DDA81F99CA31C3ED8E6DE31F16D58",
    ),
    (
        "B824FFB137A4EF87E07A",
        "4CAD",
        "67FB134DD79C7D77F52A5DCEF23DE6FD",
        0x03,
        "3E7C8E733BC133A70D278397435030",
    ),
];

/// TA71: GCK, CCK, MGCK.
pub const TA71: &[(&str, &str, &str)] = &[
    ("00000000000000000000", "00000000000000000000", "3214CD6BC0488CDC4676"),
    ("0123456789ABCDEFAABB", "BDF8E8D47CA2EDAE0CFB", "90C6037D99DB197CAF27"),
    ("8A41C56175BFBE356891", "BA3E0696E83D16608989", "50865D57F9B3D61B9099"),
];

/// TA81/TA82: GCK, version number, GCK number, K, sealed GCK.
pub const TA81_TA82: &[(&str, &str, &str, &str, &str)] = &[
    (
        "00000000000000000000",
        "A397",
        "1F5D",
        "635938ACE81F6B6782A6FA46AE4F7F69",
        "1CCF9C6BA85C5B4560F9CF5C63B0DC",
    ),
    (
        "63095AEB26F0E72628D0",
        "8FBC",
        "E363",
        "5536EB46A602E78049299D82AB648045",
        "C93595A54ECD34F9B59AFB3A0D5905",
    ),
    (
        "106A40C6F7B089B7AC41",
        "BEC4",
        "12A6",
        "08F6174EC818D2A214F1D7534D319F6C",
        "03520FE9757B66830B36B13B7CE5B4",
    ),
    (
        "C3C682DAD8AA33A2CE6B",
        "1F8B",
        "CE89",
        "C2711363D36D4FBFC9F5CF73B8B4DD35",
        "C86A1D032C97BB867A302F35DF7E93",
    ),
];

/// TA91/TA92: GSKO, version number, K, sealed GSKO.
pub const TA91_TA92: &[(&str, &str, &str, &str)] = &[
    (
        "00000000000000000000B0DC",
        "A397",
        "635938ACE81F6B6782A6FA46AE4F7F69",
        "1CCF9C6BA85C5BC7E07B0421F2C38A",
    ),
    (
        "63095AEB26F0E72628D05905",
        "8FBC",
        "5536EB46A602E78049299D82AB648045",
        "C93595A54ECD341613D0CF8703EBAC",
    ),
    (
        "106A40C6F7B089B7AC41E5B4",
        "BEC4",
        "08F6174EC818D2A214F1D7534D319F6C",
        "03520FE9757B669D93F6575FEE6F9C",
    ),
    (
        "C3C682DAD8AA33A2CE6B7E93",
        "1F8B",
        "C2711363D36D4FBFC9F5CF73B8B4DD35",
        "C86A1D032C97BB94B0018FE5507BA7",
    ),
];
