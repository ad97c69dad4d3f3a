use super::{QualitySelector, SelectorConfiguration};
use crate::{
    bindings::JsHost,
    utils::logger::LoggerLevel,
    wasm_bindgen, Logger,
};

/// The quality selector interface exported to the JavaScript-side.
///
/// If the player it is created for cannot switch qualities, the `QualitySelectorHandle` is
/// inert: it creates no button and all of its methods do nothing.
#[wasm_bindgen]
pub struct QualitySelectorHandle {
    /// `None` when the player could not support a quality selector.
    pub(super) inner: Option<QualitySelector<JsHost>>,
}

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. The
/// `on_quality_level_added` event listener is defined in its own file.
#[wasm_bindgen]
impl QualitySelectorHandle {
    /// Create a quality selector for the player linked to the JavaScript functions.
    ///
    /// # Arguments
    ///
    /// * `position_index` - Offset from the end of the control bar's children at which the
    ///   quality button should be inserted. `-2` by default.
    ///
    /// * `identify_by` - Quality level attribute used to identify entries of the menu:
    ///   `"height"` (default), `"width"`, `"bitrate"` or the name of any other numeric
    ///   attribute, displayed unformatted.
    #[wasm_bindgen(constructor)]
    pub fn new(position_index: Option<i32>, identify_by: Option<String>) -> Self {
        let config = SelectorConfiguration::from_options(position_index, identify_by.as_deref());
        let host = JsHost::new(&config.identify_by);
        let inner = match QualitySelector::try_new(host, config) {
            Ok(selector) => Some(selector),
            Err(err) => {
                Logger::info(&format!("QS: Quality selector disabled: {err}"));
                None
            }
        };
        Self { inner }
    }

    /// Returns `true` if a quality button has been created for this player.
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Restrict the player to the quality levels with the given identifier, or to all of them
    /// if `value` is `"auto"`.
    pub fn set_quality(&mut self, value: &str) {
        if let Some(selector) = self.inner.as_mut() {
            if let Err(err) = selector.set_quality_from_str(value) {
                Logger::warn(&format!("QS: {err}"));
            }
        }
    }

    /// Stop reacting to quality levels being added.
    pub fn dispose(&mut self) {
        if let Some(selector) = self.inner.as_mut() {
            selector.dispose();
        }
    }

    /// Update the maximum level of logs: `0` for none, then `1` (errors) up to `4` (debug).
    pub fn set_log_level(level: u8) {
        Logger::set_logger_level(LoggerLevel::from_u8(level));
    }
}
