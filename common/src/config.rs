pub struct Config {
    /// Reduces terminal output. `1` hides the banner and headers,
    /// `2` prints only the final earnings rate.
    pub quiet: u8,
    /// Skips the banner at startup.
    pub no_banner: bool,
    /// Seeds the automatic ticket generator.
    ///
    /// Two runs with the same seed and the same manual input issue the same tickets.
    pub seed: Option<u64>,
}
