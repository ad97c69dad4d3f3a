use super::api::QualitySelectorHandle;
use crate::{bindings::log_quality_levels, wasm_bindgen};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl QualitySelectorHandle {
    /// The JS code should call this method each time the player's quality levels collection
    /// sends an `addqualitylevel` event, after `jsSubscribeLevelAdded` has been called.
    pub fn on_quality_level_added(&mut self) {
        if let Some(selector) = self.inner.as_mut() {
            log_quality_levels(selector.host());
            selector.on_level_added();
        }
    }
}
