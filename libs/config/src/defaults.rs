//! Default configuration values
//!
//! Used when a key is missing from every configuration layer.

/// Curve defaults (90% reserve ratio, 100 CT backed by 90 RT)
pub mod curve {
    /// Reserve ratio in ppm
    pub const RESERVE_RATIO: u32 = 900_000;

    /// Initial continuous token supply, in token units
    pub const INITIAL_SUPPLY: &str = "100";

    /// Initial reserve balance, in token units
    pub const INITIAL_RESERVE: &str = "90";

    /// Decimals shared by the continuous and reserve tokens
    pub const DECIMALS: u8 = 18;
}

/// Price growth simulation defaults
pub mod simulation {
    /// Reserve tokens deposited per purchase, in token units
    pub const PURCHASE_INCREMENT: &str = "10";

    /// Number of purchases
    pub const STEPS: u32 = 10;
}

/// Logging defaults
pub mod logging {
    pub const LOG_LEVEL: &str = "info";
}

/// Default configuration file locations, relative to the working directory
pub mod paths {
    pub const BASE_CONFIG: &str = "config/curve.toml";
    pub const ENVIRONMENTS_DIR: &str = "config/environments";

    /// Prefix for environment variable overrides (`CURVE_CURVE__RESERVE_RATIO`)
    pub const ENV_PREFIX: &str = "CURVE";
}
