use super::Host;
use crate::{menu::MenuItem, quality_level::QualityLevel};

/// In-memory `Host` recording every interaction made with it.
pub(crate) struct TestHost {
    pub(crate) has_quality_levels: bool,
    pub(crate) has_hls_tech: bool,
    pub(crate) levels: Vec<QualityLevel>,
    pub(crate) control_bar_children: usize,
    pub(crate) subscribed: bool,
    pub(crate) subscribe_calls: u32,
    pub(crate) inserted_at: Option<usize>,
    pub(crate) control_bar_classes: Vec<String>,
    pub(crate) rendered_menus: Vec<Vec<MenuItem>>,
    pub(crate) pressed: Option<bool>,
    pub(crate) auto_label: String,
}

impl TestHost {
    pub(crate) fn new(levels: Vec<QualityLevel>) -> Self {
        Self {
            has_quality_levels: true,
            has_hls_tech: true,
            levels,
            control_bar_children: 10,
            subscribed: false,
            subscribe_calls: 0,
            inserted_at: None,
            control_bar_classes: vec![],
            rendered_menus: vec![],
            pressed: None,
            auto_label: "Auto".to_owned(),
        }
    }

    pub(crate) fn enabled_flags(&self) -> Vec<bool> {
        self.levels.iter().map(|l| l.enabled).collect()
    }
}

impl Host for TestHost {
    fn has_quality_levels(&self) -> bool {
        self.has_quality_levels
    }

    fn has_hls_tech(&self) -> bool {
        self.has_hls_tech
    }

    fn subscribe_level_added(&mut self) {
        self.subscribed = true;
        self.subscribe_calls += 1;
    }

    fn unsubscribe_level_added(&mut self) {
        self.subscribed = false;
    }

    fn quality_levels(&self) -> Vec<QualityLevel> {
        self.levels.clone()
    }

    fn set_level_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(level) = self.levels.get_mut(index) {
            level.enabled = enabled;
        }
    }

    fn control_bar_child_count(&self) -> usize {
        self.control_bar_children
    }

    fn insert_button(&mut self, index: usize) {
        self.inserted_at = Some(index);
        self.control_bar_children += 1;
    }

    fn add_control_bar_class(&mut self, class: &str) {
        self.control_bar_classes.push(class.to_owned());
    }

    fn update_menu(&mut self, items: &[MenuItem]) {
        self.rendered_menus.push(items.to_vec());
    }

    fn set_button_pressed(&mut self, pressed: bool) {
        self.pressed = Some(pressed);
    }

    fn localize(&self, key: &str) -> String {
        if key == "Auto" {
            self.auto_label.clone()
        } else {
            key.to_owned()
        }
    }
}
