/// How the solver treats hands that hold no run of any kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Shortcut {
    /// search every hand to the bottom
    #[default]
    Exhaustive,
    /// answer run-free hands with the greedy extras estimate
    Extras,
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Extras => write!(f, "extras"),
        }
    }
}
