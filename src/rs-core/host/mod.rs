use crate::{menu::MenuItem, quality_level::QualityLevel};

/// Interface to the media player the quality selector is attached to.
///
/// In the browser, this is implemented by `JsHost` which forwards every call to the
/// JavaScript-side. Everything here is expected to be synchronous.
pub trait Host {
    /// Returns `true` if the player exposes a quality levels collection.
    fn has_quality_levels(&self) -> bool;

    /// Returns `true` if the current playback technology handles HLS contents itself.
    fn has_hls_tech(&self) -> bool;

    /// Start receiving "level added" notifications from the quality levels collection.
    ///
    /// Each notification should lead to a call to `QualitySelector::on_level_added`.
    fn subscribe_level_added(&mut self);

    /// Stop receiving notifications subscribed to through `subscribe_level_added`.
    fn unsubscribe_level_added(&mut self);

    /// Returns every quality level currently in the collection, in collection order.
    fn quality_levels(&self) -> Vec<QualityLevel>;

    /// Update the `enabled` flag of the quality level at `index` in collection order.
    fn set_level_enabled(&mut self, index: usize, enabled: bool);

    /// Number of children currently in the control bar.
    fn control_bar_child_count(&self) -> usize;

    /// Create the quality button and insert it in the control bar at `index`.
    fn insert_button(&mut self, index: usize);

    /// Add a class to the control bar's element.
    fn add_control_bar_class(&mut self, class: &str);

    /// Replace the entries of the quality menu by `items`, in that order, then re-render it.
    fn update_menu(&mut self, items: &[MenuItem]);

    /// Set the "pressed" visual state of the quality button.
    fn set_button_pressed(&mut self, pressed: bool);

    /// Translate `key` into the player's current language.
    fn localize(&self, key: &str) -> String;
}

#[cfg(test)]
pub(crate) mod test_host;
