use crate::{
    menu::MenuItem,
    quality_level::QualityLevel,
};

/// Convert a bitrate, or any other numeric attribute, received from JavaScript into an
/// integer, ignoring values which cannot be one.
pub(crate) fn format_attribute_from_js(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v >= 0.)
        .map(|v| v.round() as u64)
}

/// Produce the arguments of `jsAddQualityMenuItem` for the given `MenuItem`.
pub(crate) fn format_menu_item_for_js(item: &MenuItem) -> (&str, String, bool) {
    (item.label.as_str(), item.value.to_string(), item.selected)
}

pub(crate) fn format_level_for_log(index: usize, level: &QualityLevel) -> String {
    format!(
        "#{index} id:{} h:{:?} w:{:?} br:{:?} other:{:?} enabled:{}",
        level.id, level.height, level.width, level.bitrate, level.other_attributes, level.enabled
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        menu::QualityChoice,
        quality_level::Identifier,
    };

    #[test]
    fn test_format_attribute_from_js() {
        assert_eq!(format_attribute_from_js(Some(2_500_000.)), Some(2_500_000));
        assert_eq!(format_attribute_from_js(Some(0.)), Some(0));
        assert_eq!(format_attribute_from_js(Some(-1.)), None);
        assert_eq!(format_attribute_from_js(Some(f64::NAN)), None);
        assert_eq!(format_attribute_from_js(Some(f64::INFINITY)), None);
        assert_eq!(format_attribute_from_js(None), None);
    }

    #[test]
    fn test_format_menu_item_for_js() {
        let item = MenuItem {
            label: "720p".to_owned(),
            value: QualityChoice::Level(Identifier(720)),
            selected: false,
        };
        assert_eq!(format_menu_item_for_js(&item), ("720p", "720".to_owned(), false));
        let item = MenuItem {
            label: "Auto".to_owned(),
            value: QualityChoice::Auto,
            selected: true,
        };
        assert_eq!(format_menu_item_for_js(&item), ("Auto", "auto".to_owned(), true));
    }
}
