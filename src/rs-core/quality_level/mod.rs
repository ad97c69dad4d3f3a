use std::{convert::Infallible, fmt, str::FromStr};

pub(crate) mod formatting;

/// Snapshot of one quality level, as exposed by the player's quality levels collection.
///
/// A quality level corresponds to one variant stream of the loaded HLS content. Only the
/// `enabled` flag is ever written back to the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QualityLevel {
    /// Identifier given by the player to that quality level. Only used for logging.
    pub id: String,

    /// Vertical resolution of the video, in pixels. `None` if unknown.
    pub height: Option<u32>,

    /// Horizontal resolution of the video, in pixels. `None` if unknown.
    pub width: Option<u32>,

    /// Peak bitrate of the variant, in bits per second. `None` if unknown.
    pub bitrate: Option<u64>,

    /// Numeric attributes other than the ones above, by name.
    ///
    /// Only the attribute designated by a `Discriminator::Other` is read from the player.
    pub other_attributes: Vec<(String, u64)>,

    /// If `false`, the adaptive logic of the player won't consider this quality level.
    pub enabled: bool,
}

impl QualityLevel {
    /// Returns the raw numeric value of the attribute designated by `discriminator`.
    ///
    /// Returns `None` if that attribute is not known for this quality level.
    pub fn attribute(&self, discriminator: &Discriminator) -> Option<u64> {
        match discriminator {
            Discriminator::Height => self.height.map(u64::from),
            Discriminator::Width => self.width.map(u64::from),
            Discriminator::Bitrate => self.bitrate,
            Discriminator::Other(name) => self
                .other_attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, val)| *val),
        }
    }
}

/// Attribute of a `QualityLevel` used to identify, deduplicate and label it in the menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Discriminator {
    /// Vertical resolution, displayed as e.g. `"720p"`.
    #[default]
    Height,
    /// Horizontal resolution, displayed as-is.
    Width,
    /// Bitrate, displayed with a unit prefix, e.g. `"2Mbps"`.
    Bitrate,
    /// Any other numeric attribute of the quality level, by name, displayed as-is.
    Other(String),
}

impl Discriminator {
    pub fn as_str(&self) -> &str {
        match self {
            Discriminator::Height => "height",
            Discriminator::Width => "width",
            Discriminator::Bitrate => "bitrate",
            Discriminator::Other(name) => name,
        }
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discriminator {
    type Err = Infallible;

    /// Unknown names lead to a `Discriminator::Other`. An empty name is the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" => Discriminator::default(),
            "height" => Discriminator::Height,
            "width" => Discriminator::Width,
            "bitrate" => Discriminator::Bitrate,
            _ => Discriminator::Other(s.to_owned()),
        })
    }
}

/// Value identifying a quality level in the menu: the raw value of its discriminator
/// attribute.
///
/// Two distinct quality levels sharing the same `Identifier` are represented by a single menu
/// item and are enabled or disabled together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(pub u64);

impl Identifier {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the `Identifier` of a `QualityLevel` from the wanted `Discriminator`.
///
/// If the level does not expose that attribute, its height is used instead. `0` is considered
/// a valid value and does not trigger that fallback.
///
/// Returns `None` if neither attribute is known.
pub fn derive_identifier(level: &QualityLevel, discriminator: &Discriminator) -> Option<Identifier> {
    level
        .attribute(discriminator)
        .or_else(|| level.attribute(&Discriminator::Height))
        .map(Identifier)
}

#[cfg(test)]
pub(crate) fn test_level(id: &str, height: Option<u32>, bitrate: Option<u64>) -> QualityLevel {
    QualityLevel {
        id: id.to_owned(),
        height,
        width: height.map(|h| h * 16 / 9),
        bitrate,
        other_attributes: vec![],
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_identifier() {
        let level = test_level("a", Some(720), Some(2_500_000));
        assert_eq!(
            derive_identifier(&level, &Discriminator::Height),
            Some(Identifier(720))
        );
        assert_eq!(
            derive_identifier(&level, &Discriminator::Bitrate),
            Some(Identifier(2_500_000))
        );
        assert_eq!(
            derive_identifier(&level, &Discriminator::Width),
            Some(Identifier(1280))
        );
    }

    #[test]
    fn test_derive_identifier_falls_back_to_height() {
        let level = test_level("a", Some(480), None);
        assert_eq!(
            derive_identifier(&level, &Discriminator::Bitrate),
            Some(Identifier(480))
        );
        assert_eq!(
            derive_identifier(&level, &Discriminator::Other("frameRate".to_owned())),
            Some(Identifier(480))
        );
        let level = test_level("b", None, None);
        assert_eq!(derive_identifier(&level, &Discriminator::Bitrate), None);
        assert_eq!(derive_identifier(&level, &Discriminator::Height), None);
    }

    #[test]
    fn test_derive_identifier_from_other_attribute() {
        let mut level = test_level("a", Some(720), None);
        level.other_attributes.push(("frameRate".to_owned(), 60));
        assert_eq!(
            derive_identifier(&level, &Discriminator::Other("frameRate".to_owned())),
            Some(Identifier(60))
        );
    }

    #[test]
    fn test_derive_identifier_keeps_zero() {
        let level = test_level("a", Some(360), Some(0));
        assert_eq!(
            derive_identifier(&level, &Discriminator::Bitrate),
            Some(Identifier(0))
        );
    }

    #[test]
    fn test_parse_discriminator() {
        assert_eq!("height".parse(), Ok(Discriminator::Height));
        assert_eq!("width".parse(), Ok(Discriminator::Width));
        assert_eq!("bitrate".parse(), Ok(Discriminator::Bitrate));
        assert_eq!("".parse(), Ok(Discriminator::Height));
        assert_eq!(
            "frameRate".parse(),
            Ok(Discriminator::Other("frameRate".to_owned()))
        );
        assert_eq!(Discriminator::Other("frameRate".to_owned()).to_string(), "frameRate");
        assert_eq!(Discriminator::default(), Discriminator::Height);
    }
}
