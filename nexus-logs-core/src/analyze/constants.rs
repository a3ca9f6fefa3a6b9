/// One progress tick per this many input lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Depth of the per-format client ranking.
pub const DEFAULT_TOP_CLIENTS: usize = 3;

/// Path prefix every repository request starts with.
pub const REPOSITORY_PREFIX: &str = "/repository/";
