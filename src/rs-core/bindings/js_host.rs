use super::{
    formatters::{format_attribute_from_js, format_level_for_log, format_menu_item_for_js},
    jsAddControlBarClass, jsAddQualityMenuItem, jsClearQualityMenu, jsControlBarChildCount,
    jsHasHlsTech, jsHasQualityLevels, jsInsertQualityButton, jsLocalize,
    jsQualityLevelAttribute, jsQualityLevelBitrate, jsQualityLevelCount, jsQualityLevelEnabled,
    jsQualityLevelHeight, jsQualityLevelId, jsQualityLevelWidth, jsRefreshQualityMenu,
    jsSetQualityButtonPressed, jsSetQualityLevelEnabled, jsSubscribeLevelAdded,
    jsUnsubscribeLevelAdded,
};
use crate::{
    host::Host,
    menu::MenuItem,
    quality_level::{Discriminator, QualityLevel},
    Logger,
};

/// `Host` implementation relying on the JavaScript functions declared in `js_functions`.
pub(crate) struct JsHost {
    /// Name of the quality level attribute to read besides the well-known ones, if any.
    other_attribute: Option<String>,
}

impl JsHost {
    pub(crate) fn new(discriminator: &Discriminator) -> Self {
        let other_attribute = match discriminator {
            Discriminator::Other(name) => Some(name.clone()),
            _ => None,
        };
        Self { other_attribute }
    }
}

impl Host for JsHost {
    fn has_quality_levels(&self) -> bool {
        jsHasQualityLevels()
    }

    fn has_hls_tech(&self) -> bool {
        jsHasHlsTech()
    }

    fn subscribe_level_added(&mut self) {
        jsSubscribeLevelAdded();
    }

    fn unsubscribe_level_added(&mut self) {
        jsUnsubscribeLevelAdded();
    }

    fn quality_levels(&self) -> Vec<QualityLevel> {
        (0..jsQualityLevelCount())
            .map(|idx| QualityLevel {
                id: jsQualityLevelId(idx),
                height: jsQualityLevelHeight(idx),
                width: jsQualityLevelWidth(idx),
                bitrate: format_attribute_from_js(jsQualityLevelBitrate(idx)),
                other_attributes: self
                    .other_attribute
                    .iter()
                    .filter_map(|name| {
                        format_attribute_from_js(jsQualityLevelAttribute(idx, name))
                            .map(|val| (name.clone(), val))
                    })
                    .collect(),
                enabled: jsQualityLevelEnabled(idx),
            })
            .collect()
    }

    fn set_level_enabled(&mut self, index: usize, enabled: bool) {
        jsSetQualityLevelEnabled(index as u32, enabled);
    }

    fn control_bar_child_count(&self) -> usize {
        jsControlBarChildCount() as usize
    }

    fn insert_button(&mut self, index: usize) {
        jsInsertQualityButton(index as u32);
    }

    fn add_control_bar_class(&mut self, class: &str) {
        jsAddControlBarClass(class);
    }

    fn update_menu(&mut self, items: &[MenuItem]) {
        jsClearQualityMenu();
        items.iter().for_each(|item| {
            let (label, value, selected) = format_menu_item_for_js(item);
            jsAddQualityMenuItem(label, &value, selected);
        });
        jsRefreshQualityMenu();
    }

    fn set_button_pressed(&mut self, pressed: bool) {
        jsSetQualityButtonPressed(pressed);
    }

    fn localize(&self, key: &str) -> String {
        jsLocalize(key)
    }
}

/// Log every quality level currently known by the player.
pub(crate) fn log_quality_levels(host: &impl Host) {
    Logger::lazy_debug(&|| {
        host.quality_levels()
            .iter()
            .enumerate()
            .map(|(i, l)| format_level_for_log(i, l))
            .collect::<Vec<String>>()
            .join("\n")
    });
}
