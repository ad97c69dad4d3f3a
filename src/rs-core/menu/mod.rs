use std::{collections::HashSet, fmt, str::FromStr};

use thiserror::Error;

use crate::quality_level::{
    derive_identifier, formatting::format_for_display, Discriminator, Identifier, QualityLevel,
};

/// Value sent by the menu when the user chooses the adaptive mode.
pub const AUTO_VALUE: &str = "auto";

/// Key looked up through the player's localization for the label of the "Auto" entry.
pub const AUTO_LABEL_KEY: &str = "Auto";

/// Quality wanted by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityChoice {
    /// Let the player's adaptive logic choose between all quality levels.
    Auto,
    /// Only allow quality levels with the given `Identifier`.
    Level(Identifier),
}

impl fmt::Display for QualityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityChoice::Auto => f.write_str(AUTO_VALUE),
            QualityChoice::Level(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for QualityChoice {
    type Err = QualityChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == AUTO_VALUE {
            return Ok(QualityChoice::Auto);
        }
        s.parse::<u64>()
            .map(|val| QualityChoice::Level(Identifier(val)))
            .map_err(|_| QualityChoiceParseError::InvalidValue(s.to_owned()))
    }
}

/// Describes one entry of the quality menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Text displayed for that entry.
    pub label: String,

    /// Value communicated back when that entry is chosen.
    pub value: QualityChoice,

    /// Whether this entry is initially shown as selected. Only the "Auto" entry is.
    pub selected: bool,
}

impl MenuItem {
    fn auto(label: String) -> Self {
        Self {
            label,
            value: QualityChoice::Auto,
            selected: true,
        }
    }
}

/// Construct the full list of menu entries from the current quality levels.
///
/// Levels sharing the same `Identifier` are merged into a single entry (the first one seen
/// wins), entries are sorted by ascending `Identifier` and an "Auto" entry, labeled with
/// `auto_label`, is always added last.
///
/// Levels for which no `Identifier` could be derived are ignored.
pub fn build_menu(
    levels: &[QualityLevel],
    discriminator: &Discriminator,
    auto_label: &str,
) -> Vec<MenuItem> {
    let mut seen = HashSet::new();
    let mut items: Vec<(Identifier, MenuItem)> = levels
        .iter()
        .filter_map(|level| derive_identifier(level, discriminator))
        .filter(|id| seen.insert(*id))
        .map(|id| {
            let item = MenuItem {
                label: format_for_display(id, discriminator),
                value: QualityChoice::Level(id),
                selected: false,
            };
            (id, item)
        })
        .collect();

    items.sort_by_key(|(id, _)| *id);
    items
        .into_iter()
        .map(|(_, item)| item)
        .chain(std::iter::once(MenuItem::auto(auto_label.to_owned())))
        .collect()
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QualityChoiceParseError {
    #[error("Invalid quality \"{0}\": expected \"auto\" or a positive integer")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality_level::test_level;

    fn heights(values: &[u32]) -> Vec<QualityLevel> {
        values
            .iter()
            .enumerate()
            .map(|(i, h)| test_level(&i.to_string(), Some(*h), None))
            .collect()
    }

    fn values(items: &[MenuItem]) -> Vec<String> {
        items.iter().map(|i| i.value.to_string()).collect()
    }

    #[test]
    fn test_deduplicates_identifiers() {
        let items = build_menu(&heights(&[720, 720, 1080]), &Discriminator::Height, "Auto");
        assert_eq!(values(&items), vec!["720", "1080", "auto"]);
        assert_eq!(items.iter().filter(|i| i.value != QualityChoice::Auto).count(), 2);
    }

    #[test]
    fn test_sorts_ascending_with_auto_last() {
        let items = build_menu(&heights(&[1080, 240, 720]), &Discriminator::Height, "Auto");
        assert_eq!(values(&items), vec!["240", "720", "1080", "auto"]);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["240p", "720p", "1080p", "Auto"]);
    }

    #[test]
    fn test_empty_levels() {
        let items = build_menu(&[], &Discriminator::Height, "Automatique");
        assert_eq!(
            items,
            vec![MenuItem {
                label: "Automatique".to_owned(),
                value: QualityChoice::Auto,
                selected: true,
            }]
        );
    }

    #[test]
    fn test_only_auto_is_selected() {
        let items = build_menu(&heights(&[480, 360]), &Discriminator::Height, "Auto");
        let selected: Vec<bool> = items.iter().map(|i| i.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
    }

    #[test]
    fn test_bitrate_menu() {
        let levels = vec![
            test_level("a", Some(720), Some(2_500_000)),
            test_level("b", Some(1080), Some(5_000_000)),
            test_level("c", Some(360), None),
        ];
        let items = build_menu(&levels, &Discriminator::Bitrate, "Auto");
        assert_eq!(values(&items), vec!["360", "2500000", "5000000", "auto"]);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["360bps", "2Mbps", "5Mbps", "Auto"]);
    }

    #[test]
    fn test_ignores_levels_without_identifier() {
        let levels = vec![test_level("a", None, None), test_level("b", Some(720), None)];
        let items = build_menu(&levels, &Discriminator::Height, "Auto");
        assert_eq!(values(&items), vec!["720", "auto"]);
    }

    #[test]
    fn test_other_attribute_menu_is_unformatted() {
        let mut with_rate = test_level("a", Some(1080), None);
        with_rate.other_attributes.push(("frameRate".to_owned(), 60));
        let levels = vec![with_rate, test_level("b", Some(720), None)];
        let items = build_menu(
            &levels,
            &Discriminator::Other("frameRate".to_owned()),
            "Auto",
        );
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["60", "720", "Auto"]);
    }

    #[test]
    fn test_is_deterministic() {
        let levels = heights(&[1080, 480, 720, 480, 2160]);
        let first = build_menu(&levels, &Discriminator::Height, "Auto");
        let second = build_menu(&levels, &Discriminator::Height, "Auto");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_quality_choice() {
        assert_eq!("auto".parse(), Ok(QualityChoice::Auto));
        assert_eq!("720".parse(), Ok(QualityChoice::Level(Identifier(720))));
        assert_eq!(" 1080 ".parse(), Ok(QualityChoice::Level(Identifier(1080))));
        assert_eq!(
            "best".parse::<QualityChoice>(),
            Err(QualityChoiceParseError::InvalidValue("best".to_owned()))
        );
        assert_eq!(QualityChoice::Auto.to_string(), "auto");
        assert_eq!(QualityChoice::Level(Identifier(480)).to_string(), "480");
    }
}
