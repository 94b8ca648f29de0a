/// Schedule-independent defaults an outer caller may want to carry around
/// between `step`/`run_steps` calls.
///
/// This is plain data, not a loader: the engine itself never reads a config
/// file or an environment variable (temperature schedules and convergence
/// detection are an outer scheduler's job, see the engine's non-goals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Default `distance_limit` passed to `step`/`run_steps`.
    pub distance_limit: usize,
    /// Default wrap-around setting for newly constructed states.
    pub wrap_around: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            distance_limit: 1,
            wrap_around: false,
        }
    }
}
