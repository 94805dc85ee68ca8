/// Grid extent in half-degree units (degrees * 2)
pub const LAT_MAX_HALF: i32 = 160;
pub const LAT_MIN_HALF: i32 = 0;
pub const LON_MIN_HALF: i32 = -180;
pub const LON_MAX_HALF: i32 = 0;

/// Lattice spacing in degrees
pub const LATTICE_STEP: f64 = 0.5;

/// Grid dimensions
pub const N_LAT: usize = 161;
pub const N_LON: usize = 181;
pub const N_CELLS: usize = N_LAT * N_LON;

/// Sentinel for cells that were never observed nor interpolated
pub const DEFAULT_CELL_VALUE: i32 = 1_000_000_000;

/// Output defaults
pub const DEFAULT_DECIMAL_PLACES: usize = 2;
pub const MEAN_SUFFIX: &str = "_mean";
pub const STDEV_SUFFIX: &str = "_stdev";
pub const CSV_EXTENSION: &str = "csv";

/// Environment prefix for settings overrides (GRID_DEFAULT_VALUE, ...)
pub const SETTINGS_ENV_PREFIX: &str = "GRID";

/// Reader defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
