use crate::quality_level::Discriminator;

const DEFAULT_POSITION_INDEX: i32 = -2;

/// Options a `QualitySelector` is created with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfiguration {
    /// Where the quality button is inserted in the control bar, as an offset from the end of
    /// its current children: `-2` means just before the last two children.
    pub position_index: i32,

    /// Attribute identifying and labelling quality levels in the menu.
    pub identify_by: Discriminator,
}

impl SelectorConfiguration {
    /// Build a `SelectorConfiguration` from the options given by the JavaScript-side, using
    /// default values for the ones not set.
    ///
    /// An `identify_by` value other than `"height"`, `"width"` or `"bitrate"` designates any
    /// other attribute of the quality levels, whose values are then displayed unformatted.
    pub fn from_options(position_index: Option<i32>, identify_by: Option<&str>) -> Self {
        let identify_by = match identify_by.map(str::parse::<Discriminator>) {
            Some(Ok(discriminator)) => discriminator,
            Some(Err(never)) => match never {},
            None => Discriminator::default(),
        };
        Self {
            position_index: position_index.unwrap_or(DEFAULT_POSITION_INDEX),
            identify_by,
        }
    }

    /// Compute the index at which the quality button should be inserted in a control bar
    /// currently containing `child_count` children.
    pub(crate) fn insertion_index(&self, child_count: usize) -> usize {
        let wanted = child_count as i64 + i64::from(self.position_index);
        wanted.clamp(0, child_count as i64) as usize
    }
}

impl Default for SelectorConfiguration {
    fn default() -> Self {
        Self {
            position_index: DEFAULT_POSITION_INDEX,
            identify_by: Discriminator::Height,
        }
    }
}
