/*!
 * Simulator Limits and Constants
 *
 * Centralized location for simulator-wide limits and thresholds.
 * All values include rationale comments explaining WHY they exist.
 */

/// Largest pool the simulator accepts at startup (256 MB)
/// Sizes above this are rejected before any state is created
pub const MAX_POOL_BYTES: usize = 256 * 1024 * 1024;

/// Default pool capacity (1 MB)
/// Used when a manager is created without an explicit size (tests, demos)
pub const DEFAULT_POOL_BYTES: usize = 1024 * 1024;

/// Owner name byte limit
/// Process names longer than this are truncated at a character boundary;
/// owner identity is limited to this many bytes
pub const MAX_OWNER_NAME_LEN: usize = 32;

/// Minimum useful free-block size
/// A split that would leave a remainder of at most this many bytes instead
/// hands the whole candidate block to the requester; the slack stays inside
/// the allocated block as internal fragmentation. Tunable.
pub const MIN_REMAINDER_BYTES: usize = 16;
