//! Driver configuration.

/// Configurable parameters used during search.
#[derive(Clone, Debug)]
pub struct PdrConfig {
    /// Whether a failed `extend()` call reschedules its obligation one layer deeper when
    /// `i < k`. (Default: true)
    pub obligation_rescheduling: bool,

    /// Whether to run layer simplification after clause propagation. This is kept for
    /// interface parity with engines that expose the knob, but any simplification pass would
    /// violate the layer invariants maintained here, so this crate treats it as a documented
    /// no-op regardless of its value. (Default: false)
    pub layer_simplification: bool,
}

impl Default for PdrConfig {
    fn default() -> PdrConfig {
        PdrConfig {
            obligation_rescheduling: true,
            layer_simplification: false,
        }
    }
}
