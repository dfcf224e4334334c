/// Presentation settings shared by both binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Hides the ASCII banner.
    pub no_banner: bool,
    /// `1` hides banner and headers, `2` and above also hides the summary.
    ///
    /// Never suppresses the rendered result itself.
    pub quiet: u8,
}
