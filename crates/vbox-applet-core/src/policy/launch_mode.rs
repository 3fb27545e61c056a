/// How a VM is started, derived from the headless/detachable policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// No `--type` flag; the tool's default GUI frontend.
    Default,
    /// `--type separate`: detachable GUI process.
    Separate,
    /// `--type headless`: no display at all.
    Headless,
}

impl LaunchMode {
    /// Value for the tool's `--type` argument, if any.
    pub fn type_argument(self) -> Option<&'static str> {
        match self {
            LaunchMode::Default => None,
            LaunchMode::Separate => Some("separate"),
            LaunchMode::Headless => Some("headless"),
        }
    }
}
