use super::{
    QualitySelector, SelectorConfiguration, SelectorCreationError, SetQualityResponse,
    CONTROL_BAR_CLASS,
};
use crate::{
    host::Host,
    menu::{build_menu, QualityChoice, QualityChoiceParseError, AUTO_LABEL_KEY},
    quality_level::derive_identifier,
    Logger,
};

impl<H: Host> QualitySelector<H> {
    /// Attach a new `QualitySelector` to the player behind `host`.
    ///
    /// This only succeeds if the player exposes a quality levels collection and if its current
    /// playback technology is the HLS one. When it does, the quality button is inserted in the
    /// control bar and "level added" notifications start to be listened to.
    ///
    /// Those conditions are only checked once: if creation fails, no quality selector will be
    /// shown for that player.
    pub fn try_new(
        mut host: H,
        config: SelectorConfiguration,
    ) -> Result<Self, SelectorCreationError> {
        if !host.has_quality_levels() {
            Logger::info("QS: No quality levels on the player, not creating the selector");
            return Err(SelectorCreationError::NoQualityLevels);
        }
        if !host.has_hls_tech() {
            Logger::info("QS: No HLS tech on the player, not creating the selector");
            return Err(SelectorCreationError::NoHlsTech);
        }

        let index = config.insertion_index(host.control_bar_child_count());
        Logger::debug(&format!(
            "QS: Creating quality selector (position: {index}, identify by: {})",
            config.identify_by
        ));
        host.insert_button(index);
        host.add_control_bar_class(CONTROL_BAR_CLASS);
        host.subscribe_level_added();
        Ok(Self {
            host,
            config,
            menu_items: vec![],
            is_listening: true,
        })
    }

    /// Rebuild the whole menu from the current quality levels and communicate it to the
    /// player.
    ///
    /// Every level is re-read, not only the one just added, so calling this several times
    /// without any change in the quality levels always produces the same menu.
    pub fn on_level_added(&mut self) {
        if !self.is_listening {
            Logger::debug("QS: Ignoring quality level added after dispose");
            return;
        }
        let levels = self.host.quality_levels();
        let auto_label = self.host.localize(AUTO_LABEL_KEY);
        let items = build_menu(&levels, &self.config.identify_by, &auto_label);
        Logger::lazy_debug(&|| {
            format!(
                "QS: Quality level added, updating menu ({} levels, {} entries)",
                levels.len(),
                items.len()
            )
        });
        self.host.update_menu(&items);
        self.menu_items = items;
    }

    /// Enable only the quality levels corresponding to `choice` and disable the others.
    ///
    /// `QualityChoice::Auto` enables all of them, letting the player's adaptive logic choose
    /// again. If no level corresponds to the wanted identifier, all levels end up disabled.
    ///
    /// The quality button is then put back in its unpressed state.
    pub fn set_quality(&mut self, choice: QualityChoice) -> SetQualityResponse {
        let discriminator = &self.config.identify_by;
        let mut enabled_count = 0;
        for (index, level) in self.host.quality_levels().iter().enumerate() {
            let enabled = match choice {
                QualityChoice::Auto => true,
                QualityChoice::Level(id) => derive_identifier(level, discriminator) == Some(id),
            };
            if enabled {
                enabled_count += 1;
            }
            self.host.set_level_enabled(index, enabled);
        }
        self.host.set_button_pressed(false);

        match choice {
            QualityChoice::Auto => {
                Logger::info("QS: Enabling all quality levels");
                SetQualityResponse::AutoSelected
            }
            QualityChoice::Level(id) if enabled_count == 0 => {
                Logger::warn(&format!(
                    "QS: No quality level with {discriminator} {id}, all levels are now disabled"
                ));
                SetQualityResponse::NoMatchingLevel
            }
            QualityChoice::Level(id) => {
                Logger::info(&format!(
                    "QS: Selected {discriminator} {id} ({enabled_count} level(s))"
                ));
                SetQualityResponse::LevelSelected { enabled_count }
            }
        }
    }

    /// Same as `set_quality` but with the textual value sent by the menu: either `"auto"` or
    /// an identifier.
    ///
    /// Quality levels are left untouched if `value` cannot be parsed.
    pub fn set_quality_from_str(
        &mut self,
        value: &str,
    ) -> Result<SetQualityResponse, QualityChoiceParseError> {
        let choice = value.parse::<QualityChoice>()?;
        Ok(self.set_quality(choice))
    }

    /// Stop listening to "level added" notifications.
    pub fn dispose(&mut self) {
        if self.is_listening {
            self.host.unsubscribe_level_added();
            self.is_listening = false;
        }
    }
}
