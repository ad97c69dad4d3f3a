use super::{Discriminator, Identifier};

/// Unit prefixes applied to bitrates, indexed by the number of divisions by 1000 performed.
const BITRATE_PREFIXES: [&str; 5] = ["", "k", "M", "G", "T"];

/// Produce the human-readable label of a menu item from its `Identifier`.
///
/// The label depends on what the `Identifier` represents:
///   - bitrates are scaled down to the biggest fitting unit and suffixed with `"bps"`
///     (e.g. `"2Mbps"`). The scaled value is floored.
///   - heights are suffixed with `"p"` (e.g. `"720p"`).
///   - anything else (widths, other attributes) is displayed as is.
pub(crate) fn format_for_display(identifier: Identifier, discriminator: &Discriminator) -> String {
    match discriminator {
        Discriminator::Bitrate => format_bitrate(identifier.value()),
        Discriminator::Height => format!("{identifier}p"),
        Discriminator::Width | Discriminator::Other(_) => identifier.to_string(),
    }
}

fn format_bitrate(bitrate: u64) -> String {
    let mut value = bitrate as f64;
    let mut scalings = 0;
    while value >= 1000. && scalings < BITRATE_PREFIXES.len() - 1 {
        value /= 1000.;
        scalings += 1;
    }
    format!("{}{}bps", value.floor() as u64, BITRATE_PREFIXES[scalings])
}
