use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelColor};

/// A channel declared in configuration.
///
/// Only global channels can be declared this way; channels with scoring
/// rules are built in code, since a rule is a function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub color: ChannelColor,
}

impl ChannelDefinition {
    /// Builds the global channel this definition describes.
    #[must_use]
    pub fn build(&self) -> Channel {
        Channel::global(&self.display_name, self.color, &self.id)
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct ChannelsFile {
        channel: Vec<ChannelDefinition>,
    }

    #[test]
    fn definitions_load_from_toml() {
        let file: ChannelsFile = toml::from_str(
            r#"
            [[channel]]
            id = "g"
            display_name = "General"

            [[channel]]
            id = "ooc"
            display_name = "Out of Character"
            color = "gray"
            "#,
        )
        .unwrap();

        assert_eq!(file.channel.len(), 2);
        let general = file.channel[0].build();
        assert!(general.is_global());
        assert_eq!(general.id(), "g");
        assert_eq!(general.color(), ChannelColor::White); // default

        let ooc = file.channel[1].build();
        assert_eq!(ooc.display_name(), "Out of Character");
        assert_eq!(ooc.color(), ChannelColor::Gray);
    }
}
