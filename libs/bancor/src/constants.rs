//! Fixed-point constants for the Bancor power approximation
//!
//! All values are expressed in the binary fixed-point format used by
//! [`crate::power::PowerMath`]: `FIXED_1 = 2^127` represents `1.0`. The tables
//! are reproduced exactly so that results stay bit-identical with the
//! on-chain formula.

use ethers_core::types::U256;

/// Largest reserve ratio (100%), in parts per million
pub const MAX_RESERVE_RATIO: u32 = 1_000_000;

/// Smallest binary precision `general_exp` is evaluated at
pub const MIN_PRECISION: u8 = 32;

/// Largest binary precision; also the scale of `FIXED_1`
pub const MAX_PRECISION: u8 = 127;

/// `1.0` in fixed point
pub const FIXED_1: U256 = u256_hex("0x080000000000000000000000000000000");

/// `2.0` in fixed point
pub const FIXED_2: U256 = u256_hex("0x100000000000000000000000000000000");

/// Exclusive upper bound for the power base numerator
pub const MAX_NUM: U256 = u256_hex("0x200000000000000000000000000000000");

/// `LN2_NUMERATOR / LN2_DENOMINATOR ≈ ln(2)`
pub const LN2_NUMERATOR: U256 = u256_hex("0x3f80fe03f80fe03f80fe03f80fe03f8");
pub const LN2_DENOMINATOR: U256 = u256_hex("0x5b9de1d10bf4103d647b0955897ba80");

/// `optimal_log` is valid below `e` (in fixed point)
pub const OPT_LOG_MAX_VAL: U256 = u256_hex("0x15bf0a8b1457695355fb8ac404e7a79e3");

/// `optimal_exp` is valid below `16.0` (in fixed point)
pub const OPT_EXP_MAX_VAL: U256 = u256_hex("0x800000000000000000000000000000000");

/// `e^(2^-k)` for k = 1..=8, used to reduce the `optimal_log` argument
pub const OPT_LOG_THRESHOLDS: [u128; 8] = [
    0xd3094c70f034de4b96ff7d5b6f99fcd8, // e^(1/2)
    0xa45af1e1f40c333b3de1db4dd55f29a7, // e^(1/4)
    0x910b022db7ae67ce76b441c27035c6a1, // e^(1/8)
    0x88415abbe9a76bead8d00cf112e4d4a8, // e^(1/16)
    0x84102b00893f64c705e841d5d4064bd3, // e^(1/32)
    0x8204055aaef1c8bd5c3259f4822735a2, // e^(1/64)
    0x810100ab00222d861931c15e39b44e99, // e^(1/128)
    0x808040155aabbbe9451521693554f733, // e^(1/256)
];

/// `optimal_log` series terms `(k * 2^128 / (2k - 1), k * 2^128)` for k = 1..=8.
///
/// Each pair adds `y^(2k-1) / (2k-1) - y^(2k) / (2k)`.
pub const OPT_LOG_SERIES: [(U256, U256); 8] = [
    (u256_hex("0x100000000000000000000000000000000"), u256_hex("0x100000000000000000000000000000000")),
    (u256_hex("0x0aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), u256_hex("0x200000000000000000000000000000000")),
    (u256_hex("0x099999999999999999999999999999999"), u256_hex("0x300000000000000000000000000000000")),
    (u256_hex("0x092492492492492492492492492492492"), u256_hex("0x400000000000000000000000000000000")),
    (u256_hex("0x08e38e38e38e38e38e38e38e38e38e38e"), u256_hex("0x500000000000000000000000000000000")),
    (u256_hex("0x08ba2e8ba2e8ba2e8ba2e8ba2e8ba2e8b"), u256_hex("0x600000000000000000000000000000000")),
    (u256_hex("0x089d89d89d89d89d89d89d89d89d89d89"), u256_hex("0x700000000000000000000000000000000")),
    (u256_hex("0x088888888888888888888888888888888"), u256_hex("0x800000000000000000000000000000000")),
];

/// `optimal_exp` series is evaluated on `x mod 2^-3`
pub const OPT_EXP_FRACTION_MASK: U256 = u256_hex("0x10000000000000000000000000000000");

/// `20! / k!` for k = 2..=20
pub const OPT_EXP_COEFFICIENTS: [u64; 19] = [
    0x10e1b3be415a0000, // 20! / 02!
    0x05a0913f6b1e0000, // 20! / 03!
    0x0168244fdac78000, // 20! / 04!
    0x004807432bc18000, // 20! / 05!
    0x000c0135dca04000, // 20! / 06!
    0x0001b707b1cdc000, // 20! / 07!
    0x000036e0f639b800, // 20! / 08!
    0x00000618fee9f800, // 20! / 09!
    0x0000009c197dcc00, // 20! / 10!
    0x0000000e30dce400, // 20! / 11!
    0x000000012ebd1300, // 20! / 12!
    0x0000000017499f00, // 20! / 13!
    0x0000000001a9d480, // 20! / 14!
    0x00000000001c6380, // 20! / 15!
    0x000000000001c638, // 20! / 16!
    0x0000000000001ab8, // 20! / 17!
    0x000000000000017c, // 20! / 18!
    0x0000000000000014, // 20! / 19!
    0x0000000000000001, // 20! / 20!
];

/// `20!`
pub const OPT_EXP_DIVISOR: u64 = 0x21c3677c82b40000;

/// `(bit, numerator, denominator)`: when `bit` is set in the exponent, the
/// result is multiplied by `numerator / denominator ≈ e^(2^k)` for k = -3..=3.
pub const OPT_EXP_HI_TERMS: [(U256, U256, U256); 7] = [
    (
        u256_hex("0x010000000000000000000000000000000"),
        u256_hex("0x1c3d6a24ed82218787d624d3e5eba95f9"),
        u256_hex("0x18ebef9eac820ae8682b9793ac6d1e776"),
    ), // e^(1/8)
    (
        u256_hex("0x020000000000000000000000000000000"),
        u256_hex("0x18ebef9eac820ae8682b9793ac6d1e778"),
        u256_hex("0x1368b2fc6f9609fe7aceb46aa619baed4"),
    ), // e^(1/4)
    (
        u256_hex("0x040000000000000000000000000000000"),
        u256_hex("0x1368b2fc6f9609fe7aceb46aa619baed5"),
        u256_hex("0x0bc5ab1b16779be3575bd8f0520a9f21f"),
    ), // e^(1/2)
    (
        u256_hex("0x080000000000000000000000000000000"),
        u256_hex("0x0bc5ab1b16779be3575bd8f0520a9f21e"),
        u256_hex("0x0454aaa8efe072e7f6ddbab84b40a55c9"),
    ), // e^1
    (
        u256_hex("0x100000000000000000000000000000000"),
        u256_hex("0x0454aaa8efe072e7f6ddbab84b40a55c5"),
        u256_hex("0x00960aadc109e7a3bf4578099615711ea"),
    ), // e^2
    (
        u256_hex("0x200000000000000000000000000000000"),
        u256_hex("0x00960aadc109e7a3bf4578099615711d7"),
        u256_hex("0x0002bf84208204f5977f9a8cf01fdce3d"),
    ), // e^4
    (
        u256_hex("0x400000000000000000000000000000000"),
        u256_hex("0x0002bf84208204f5977f9a8cf01fdc307"),
        u256_hex("0x0000003c6ab775dd0b95b4cbee7e65d11"),
    ), // e^8
];

/// `33! / k!` for k = 2..=33
pub const GENERAL_EXP_COEFFICIENTS: [u128; 32] = [
    0x3442c4e6074a82f1797f72ac0000000, // 33! / 02!
    0x116b96f757c380fb287fd0e40000000, // 33! / 03!
    0x45ae5bdd5f0e03eca1ff4390000000, // 33! / 04!
    0xdefabf91302cd95b9ffda50000000, // 33! / 05!
    0x2529ca9832b22439efff9b8000000, // 33! / 06!
    0x54f1cf12bd04e516b6da88000000, // 33! / 07!
    0xa9e39e257a09ca2d6db51000000, // 33! / 08!
    0x12e066e7b839fa050c309000000, // 33! / 09!
    0x1e33d7d926c329a1ad1a800000, // 33! / 10!
    0x2bee513bdb4a6b19b5f800000, // 33! / 11!
    0x3a9316fa79b88eccf2a00000, // 33! / 12!
    0x48177ebe1fa812375200000, // 33! / 13!
    0x5263fe90242dcbacf00000, // 33! / 14!
    0x57e22099c030d94100000, // 33! / 15!
    0x57e22099c030d9410000, // 33! / 16!
    0x52b6b54569976310000, // 33! / 17!
    0x4985f67696bf748000, // 33! / 18!
    0x3dea12ea99e498000, // 33! / 19!
    0x31880f2214b6e000, // 33! / 20!
    0x25bcff56eb36000, // 33! / 21!
    0x1b722e10ab1000, // 33! / 22!
    0x1317c70077000, // 33! / 23!
    0xcba84aafa00, // 33! / 24!
    0x82573a0a00, // 33! / 25!
    0x5035ad900, // 33! / 26!
    0x2f881b00, // 33! / 27!
    0x1b29340, // 33! / 28!
    0xefc40, // 33! / 29!
    0x7fe0, // 33! / 30!
    0x420, // 33! / 31!
    0x21, // 33! / 32!
    0x1, // 33! / 33!
];

/// `33!`
pub const GENERAL_EXP_DIVISOR: u128 = 0x688589cc0e9505e2f2fee5580000000;

/// `MAX_EXP_ARRAY[p - MIN_PRECISION]` is the largest fixed-point exponent
/// (scaled by `2^127`) whose `general_exp` at precision `p` fits in 256 bits.
pub const MAX_EXP_ARRAY: [U256; 96] = [
    u256_hex("0x1c35fedd14ffffffffffffffffffffffff"),
    u256_hex("0x1b0ce43b323fffffffffffffffffffffff"),
    u256_hex("0x19f0028ec1ffffffffffffffffffffffff"),
    u256_hex("0x18ded91f0e7fffffffffffffffffffffff"),
    u256_hex("0x17d8ec7f0417ffffffffffffffffffffff"),
    u256_hex("0x16ddc6556cdbffffffffffffffffffffff"),
    u256_hex("0x15ecf52776a1ffffffffffffffffffffff"),
    u256_hex("0x15060c256cb2ffffffffffffffffffffff"),
    u256_hex("0x1428a2f98d72ffffffffffffffffffffff"),
    u256_hex("0x13545598e5c23fffffffffffffffffffff"),
    u256_hex("0x1288c4161ce1dfffffffffffffffffffff"),
    u256_hex("0x11c592761c666fffffffffffffffffffff"),
    u256_hex("0x110a688680a757ffffffffffffffffffff"),
    u256_hex("0x1056f1b5bedf77ffffffffffffffffffff"),
    u256_hex("0xfaadceceeff8bffffffffffffffffffff"),
    u256_hex("0xf05dc6b27edadffffffffffffffffffff"),
    u256_hex("0xe67a5a25da4107fffffffffffffffffff"),
    u256_hex("0xdcff115b14eedffffffffffffffffffff"),
    u256_hex("0xd3e7a392431239fffffffffffffffffff"),
    u256_hex("0xcb2ff529eb71e4fffffffffffffffffff"),
    u256_hex("0xc2d415c3db974afffffffffffffffffff"),
    u256_hex("0xbad03e7d883f69bffffffffffffffffff"),
    u256_hex("0xb320d03b2c343d5ffffffffffffffffff"),
    u256_hex("0xabc25204e02828dffffffffffffffffff"),
    u256_hex("0xa4b16f74ee4bb207fffffffffffffffff"),
    u256_hex("0x9deaf736ac1f569ffffffffffffffffff"),
    u256_hex("0x976bd9952c7aa957fffffffffffffffff"),
    u256_hex("0x9131271922eaa606fffffffffffffffff"),
    u256_hex("0x8b380f3558668c46fffffffffffffffff"),
    u256_hex("0x857ddf0117efa215bffffffffffffffff"),
    u256_hex("0x7ffffffffffffffffffffffffffffffff"),
    u256_hex("0x7abbf6f6abb9d087fffffffffffffffff"),
    u256_hex("0x75af62cbac95f7dfa7fffffffffffffff"),
    u256_hex("0x70d7fb7452e187ac13fffffffffffffff"),
    u256_hex("0x6c3390ecc8af379295fffffffffffffff"),
    u256_hex("0x67c00a3b07ffc01fd6fffffffffffffff"),
    u256_hex("0x637b647c39cbb9d3d27ffffffffffffff"),
    u256_hex("0x5f63b1fc104dbd39587ffffffffffffff"),
    u256_hex("0x5b771955b36e12f7235ffffffffffffff"),
    u256_hex("0x57b3d49dda84556d6f6ffffffffffffff"),
    u256_hex("0x54183095b2c8ececf30ffffffffffffff"),
    u256_hex("0x50a28be635ca2b888f77fffffffffffff"),
    u256_hex("0x4d5156639708c9db33c3fffffffffffff"),
    u256_hex("0x4a23105873875bd52dfdfffffffffffff"),
    u256_hex("0x471649d87199aa990756fffffffffffff"),
    u256_hex("0x4429a21a029d4c1457cfbffffffffffff"),
    u256_hex("0x415bc6d6fb7dd71af2cb3ffffffffffff"),
    u256_hex("0x3eab73b3bbfe282243ce1ffffffffffff"),
    u256_hex("0x3c1771ac9fb6b4c18e229ffffffffffff"),
    u256_hex("0x399e96897690418f785257fffffffffff"),
    u256_hex("0x373fc456c53bb779bf0ea9fffffffffff"),
    u256_hex("0x34f9e8e490c48e67e6ab8bfffffffffff"),
    u256_hex("0x32cbfd4a7adc790560b3337ffffffffff"),
    u256_hex("0x30b50570f6e5d2acca94613ffffffffff"),
    u256_hex("0x2eb40f9f620fda6b56c2861ffffffffff"),
    u256_hex("0x2cc8340ecb0d0f520a6af58ffffffffff"),
    u256_hex("0x2af09481380a0a35cf1ba02ffffffffff"),
    u256_hex("0x292c5bdd3b92ec810287b1b3fffffffff"),
    u256_hex("0x277abdcdab07d5a77ac6d6b9fffffffff"),
    u256_hex("0x25daf6654b1eaa55fd64df5efffffffff"),
    u256_hex("0x244c49c648baa98192dce88b7ffffffff"),
    u256_hex("0x22ce03cd5619a311b2471268bffffffff"),
    u256_hex("0x215f77c045fbe885654a44a0fffffffff"),
    u256_hex("0x1ffffffffffffffffffffffffffffffff"),
    u256_hex("0x1eaefdbdaaee7421fc4d3ede5ffffffff"),
    u256_hex("0x1d6bd8b2eb257df7e8ca57b09bfffffff"),
    u256_hex("0x1c35fedd14b861eb0443f7f133fffffff"),
    u256_hex("0x1b0ce43b322bcde4a56e8ada5afffffff"),
    u256_hex("0x19f0028ec1fff007f5a195a39dfffffff"),
    u256_hex("0x18ded91f0e72ee74f49b15ba527ffffff"),
    u256_hex("0x17d8ec7f04136f4e5615fd41a63ffffff"),
    u256_hex("0x16ddc6556cdb84bdc8d12d22e6fffffff"),
    u256_hex("0x15ecf52776a1155b5bd8395814f7fffff"),
    u256_hex("0x15060c256cb23b3b3cc3754cf40ffffff"),
    u256_hex("0x1428a2f98d728ae223ddab715be3fffff"),
    u256_hex("0x13545598e5c23276ccf0ede68034fffff"),
    u256_hex("0x1288c4161ce1d6f54b7f61081194fffff"),
    u256_hex("0x11c592761c666aa641d5a01a40f17ffff"),
    u256_hex("0x110a688680a7530515f3e6e6cfdcdffff"),
    u256_hex("0x1056f1b5bedf75c6bcb2ce8aed428ffff"),
    u256_hex("0xfaadceceeff8a0890f3875f008277fff"),
    u256_hex("0xf05dc6b27edad306388a600f6ba0bfff"),
    u256_hex("0xe67a5a25da41063de1495d5b18cdbfff"),
    u256_hex("0xdcff115b14eedde6fc3aa5353f2e4fff"),
    u256_hex("0xd3e7a3924312399f9aae2e0f868f8fff"),
    u256_hex("0xcb2ff529eb71e41582cccd5a1ee26fff"),
    u256_hex("0xc2d415c3db974ab32a51840c0b67edff"),
    u256_hex("0xbad03e7d883f69ad5b0a186184e06bff"),
    u256_hex("0xb320d03b2c343d4829abd6075f0cc5ff"),
    u256_hex("0xabc25204e02828d73c6e80bcdb1a95bf"),
    u256_hex("0xa4b16f74ee4bb2040a1ec6c15fbbf2df"),
    u256_hex("0x9deaf736ac1f569deb1b5ae3f36c130f"),
    u256_hex("0x976bd9952c7aa957f5937d790ef65037"),
    u256_hex("0x9131271922eaa6064b73a22d0bd4f2bf"),
    u256_hex("0x8b380f3558668c46c91c49a2f8e967b9"),
    u256_hex("0x857ddf0117efa215952912839f6473e6"),
];

/// Parse a hexadecimal literal into a [`U256`] at compile time.
///
/// Panics (a compile error in const context) on a non-hex digit or on a
/// literal wider than 256 bits.
pub const fn u256_hex(literal: &str) -> U256 {
    let bytes = literal.as_bytes();
    let mut limbs = [0u64; 4];
    let mut i = if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    };

    while i < bytes.len() {
        let digit = match bytes[i] {
            b @ b'0'..=b'9' => (b - b'0') as u64,
            b @ b'a'..=b'f' => (b - b'a' + 10) as u64,
            b @ b'A'..=b'F' => (b - b'A' + 10) as u64,
            _ => panic!("invalid hex digit in U256 literal"),
        };
        if limbs[3] >> 60 != 0 {
            panic!("U256 literal exceeds 256 bits");
        }
        limbs[3] = (limbs[3] << 4) | (limbs[2] >> 60);
        limbs[2] = (limbs[2] << 4) | (limbs[1] >> 60);
        limbs[1] = (limbs[1] << 4) | (limbs[0] >> 60);
        limbs[0] = (limbs[0] << 4) | digit;
        i += 1;
    }

    U256(limbs)
}
