//! Configuration for a play session.

/// Narrowest wrap width accepted.
pub const MIN_WIDTH: usize = 20;

/// Configuration for console play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Column at which node text is wrapped.
    pub width: usize,
    /// Emit ANSI colors.
    pub color: bool,
    /// Offer another playthrough after an ending.
    pub replay: bool,
    /// Show the title banner at the start of each playthrough.
    pub banner: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            width: 84,
            color: false,
            replay: false,
            banner: true,
        }
    }
}

impl PlayConfig {
    /// Set the wrap width (at least [`MIN_WIDTH`]).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the play-again prompt.
    pub fn with_replay(mut self, replay: bool) -> Self {
        self.replay = replay;
        self
    }

    /// Enable or disable the title banner.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PlayConfig::default();
        assert_eq!(cfg.width, 84);
        assert!(!cfg.color);
        assert!(!cfg.replay);
        assert!(cfg.banner);
    }

    #[test]
    fn builder_methods() {
        let cfg = PlayConfig::default()
            .with_width(60)
            .with_color(true)
            .with_replay(true)
            .with_banner(false);
        assert_eq!(cfg.width, 60);
        assert!(cfg.color);
        assert!(cfg.replay);
        assert!(!cfg.banner);
    }

    #[test]
    fn width_clamped() {
        let cfg = PlayConfig::default().with_width(3);
        assert_eq!(cfg.width, MIN_WIDTH);
    }
}
