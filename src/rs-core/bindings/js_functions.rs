//! # js_functions
//!
//! This file lists all JavaScript functions that are callable from Rust as well as
//! struct and enumeration used by those functions.
//!
//! The JavaScript glue instantiating the WebAssembly module has to provide all of them as
//! imports, bound to a single player instance:
//!
//! | Function                    | Player-side counterpart                                   |
//! |-----------------------------|-----------------------------------------------------------|
//! | `jsLog`                     | `console.*` or the player's logger                        |
//! | `jsHasQualityLevels`        | `typeof player.qualityLevels === "function"`              |
//! | `jsHasHlsTech`              | the current tech exposes an HLS handler                   |
//! | `jsSubscribeLevelAdded`     | `qualityLevels().on("addqualitylevel", ...)`              |
//! | `jsUnsubscribeLevelAdded`   | `qualityLevels().off("addqualitylevel", ...)`             |
//! | `jsQualityLevelCount`       | `qualityLevels().length`                                  |
//! | `jsQualityLevelId`          | `qualityLevels()[index].id`                               |
//! | `jsQualityLevelHeight`      | `qualityLevels()[index].height`                           |
//! | `jsQualityLevelWidth`       | `qualityLevels()[index].width`                            |
//! | `jsQualityLevelBitrate`     | `qualityLevels()[index].bitrate`                          |
//! | `jsQualityLevelAttribute`   | `qualityLevels()[index][name]`                            |
//! | `jsQualityLevelEnabled`     | `qualityLevels()[index].enabled` (read)                   |
//! | `jsSetQualityLevelEnabled`  | `qualityLevels()[index].enabled = enabled`                |
//! | `jsControlBarChildCount`    | `controlBar.children().length`                            |
//! | `jsInsertQualityButton`     | `controlBar.addChild(button, {}, index)`                  |
//! | `jsAddControlBarClass`      | `controlBar.addClass(class)`                              |
//! | `jsClearQualityMenu`        | empty the list of items the menu button builds            |
//! | `jsAddQualityMenuItem`      | push one item to that list                                |
//! | `jsRefreshQualityMenu`      | `button.update()`                                         |
//! | `jsSetQualityButtonPressed` | `button.pressButton()` / `button.unpressButton()`         |
//! | `jsLocalize`                | `player.localize(key)`                                    |
//!
//! Absent numeric attributes should be returned as `undefined`. Quality levels are designated
//! by their index in the player's quality levels collection, in collection order.

use crate::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Returns `true` if the player exposes a `qualityLevels` collection.
    pub fn jsHasQualityLevels() -> bool;

    // Returns `true` if the player's current tech exposes an HLS handler.
    pub fn jsHasHlsTech() -> bool;

    // Start listening to the `addqualitylevel` event of the quality levels collection.
    //
    // Each time that event is sent, the `on_quality_level_added` method of the
    // `QualitySelectorHandle` should be called.
    pub fn jsSubscribeLevelAdded();

    // Remove the listener added through `jsSubscribeLevelAdded`, if one.
    pub fn jsUnsubscribeLevelAdded();

    // Returns the number of quality levels currently in the collection.
    pub fn jsQualityLevelCount() -> u32;

    // Returns the `id` property of the quality level at the given index.
    pub fn jsQualityLevelId(index: u32) -> String;

    // Returns the `height` property of the quality level at the given index, if set.
    pub fn jsQualityLevelHeight(index: u32) -> Option<u32>;

    // Returns the `width` property of the quality level at the given index, if set.
    pub fn jsQualityLevelWidth(index: u32) -> Option<u32>;

    // Returns the `bitrate` property of the quality level at the given index, if set.
    //
    // Returned as a float as bitrates may go beyond what JavaScript can represent as an
    // integer through bindings.
    pub fn jsQualityLevelBitrate(index: u32) -> Option<f64>;

    // Returns the numeric property called `name` of the quality level at the given index, if
    // set. Only called for attributes other than `height`, `width` and `bitrate`.
    pub fn jsQualityLevelAttribute(index: u32, name: &str) -> Option<f64>;

    // Returns the `enabled` property of the quality level at the given index.
    pub fn jsQualityLevelEnabled(index: u32) -> bool;

    // Set the `enabled` property of the quality level at the given index.
    pub fn jsSetQualityLevelEnabled(index: u32, enabled: bool);

    // Returns the number of children in the player's control bar.
    pub fn jsControlBarChildCount() -> u32;

    // Create the quality button and add it to the control bar at the given child index.
    pub fn jsInsertQualityButton(index: u32);

    // Add the given class to the control bar's element.
    pub fn jsAddControlBarClass(class: &str);

    // Remove every entry from the quality menu, before new ones are added through
    // `jsAddQualityMenuItem`.
    pub fn jsClearQualityMenu();

    // Add an entry at the end of the quality menu.
    //
    // `value` is the one which should be given back to the `set_quality` method of the
    // `QualitySelectorHandle` when that entry is chosen.
    pub fn jsAddQualityMenuItem(label: &str, value: &str, selected: bool);

    // Re-render the quality menu with the entries added since the last `jsClearQualityMenu`
    // call.
    pub fn jsRefreshQualityMenu();

    // Update the "pressed" state of the quality button.
    pub fn jsSetQualityButtonPressed(pressed: bool);

    // Translate the given string through the player's localization.
    pub fn jsLocalize(key: &str) -> String;
}

/// Log levels defined by the JavaScript-side.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}
