use dioxus::prelude::*;

/// Whether the secondary block of a disclosure panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn toggled(self) -> Self {
        match self {
            DisclosureState::Collapsed => DisclosureState::Expanded,
            DisclosureState::Expanded => DisclosureState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DisclosureState::Expanded
    }
}

/// Disclosure state owned by a single component instance.
#[derive(Clone, Copy, PartialEq)]
pub struct Disclosure {
    state: Signal<DisclosureState>,
}

pub fn use_disclosure() -> Disclosure {
    let state = use_signal(DisclosureState::default);

    Disclosure { state }
}

impl Disclosure {
    pub fn state(&self) -> DisclosureState {
        *self.state.read()
    }

    pub fn is_expanded(&self) -> bool {
        self.state().is_expanded()
    }

    /// Flip between collapsed and expanded
    pub fn toggle(&mut self) {
        let next = self.state().toggled();
        self.state.set(next);
        tracing::debug!(state = ?next, "disclosure toggled");
    }
}
