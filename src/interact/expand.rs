/// Expand/collapse state of one card. Not persisted; every render starts
/// collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            CardState::Collapsed => CardState::Expanded,
            CardState::Expanded => CardState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == CardState::Expanded
    }

    /// CSS `display` value of the detail region.
    pub fn detail_display(self) -> &'static str {
        match self {
            CardState::Collapsed => "none",
            CardState::Expanded => "block",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CardState::Collapsed => "▼",
            CardState::Expanded => "▲",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardState::Collapsed => "More Info",
            CardState::Expanded => "Less Info",
        }
    }
}
