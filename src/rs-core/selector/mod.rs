use crate::{host::Host, menu::MenuItem};

pub(crate) mod api;
mod configuration;
mod core;
mod event_listeners;

pub use configuration::SelectorConfiguration;

/// Class added to the control bar once a quality button has been inserted in it.
pub const CONTROL_BAR_CLASS: &str = "vjs-quality-selector-enabled";

/// The `QualitySelector` keeps the quality menu of a player in sync with its quality levels and
/// applies the quality chosen by the user on them.
///
/// It can only be created through `QualitySelector::try_new`, which checks that the player is
/// actually able to switch between quality levels.
pub struct QualitySelector<H: Host> {
    /// Interface to the player.
    host: H,

    /// Options this `QualitySelector` was created with.
    config: SelectorConfiguration,

    /// Entries of the menu as last communicated to the player.
    ///
    /// Empty until the first "level added" notification.
    menu_items: Vec<MenuItem>,

    /// If `false`, "level added" notifications are not listened to anymore.
    is_listening: bool,
}

/// Outcome of a `QualitySelector::set_quality` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetQualityResponse {
    /// Every quality level is now enabled, letting the adaptive logic choose.
    AutoSelected,

    /// Only the quality levels with the wanted identifier are now enabled.
    LevelSelected { enabled_count: usize },

    /// No quality level had the wanted identifier. All of them are now disabled.
    NoMatchingLevel,
}

impl<H: Host> QualitySelector<H> {
    pub fn config(&self) -> &SelectorConfiguration {
        &self.config
    }

    /// Returns the entries of the quality menu currently displayed.
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }
}

use thiserror::Error;

/// Reasons why a `QualitySelector` could not be created for a player.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectorCreationError {
    #[error("The player does not expose any quality levels collection")]
    NoQualityLevels,
    #[error("The current playback technology does not handle HLS")]
    NoHlsTech,
}
