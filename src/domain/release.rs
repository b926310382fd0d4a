/// What the filter learned about one `<item>` while streaming over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    pub title: Option<String>,
    /// Leading text of the first `sparkle:channel` child, if any.
    pub channel: Option<String>,
}

impl Release {
    /// Exact, case-sensitive comparison. A release without a channel never matches.
    pub fn belongs_to(&self, channel: &str) -> bool {
        self.channel.as_deref() == Some(channel)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<untitled>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to_is_exact() {
        let release = Release {
            title: None,
            channel: Some("edge".into()),
        };

        assert!(release.belongs_to("edge"));
        assert!(!release.belongs_to("Edge"));
        assert!(!release.belongs_to("edge "));
    }

    #[test]
    fn test_release_without_channel_never_matches() {
        let release = Release::default();

        assert!(!release.belongs_to(""));
        assert!(!release.belongs_to("stable"));
        assert_eq!(release.display_title(), "<untitled>");
    }
}
