use crossterm::style::Color;

/// Design tokens for the redeploy CLI output.
///
/// All icons and colors used by the console sink come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Step identifiers (used in banners).
    pub const START: &str = "🚀";
    pub const SOURCE: &str = "📥";
    pub const CONTAINER: &str = "🐳";
    pub const STATIC: &str = "🌐";
    pub const PROXY: &str = "🛡";
    pub const DONE: &str = "✅";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";

    pub const START: &str = "==>";
    pub const SOURCE: &str = "[git]";
    pub const CONTAINER: &str = "[svc]";
    pub const STATIC: &str = "[www]";
    pub const PROXY: &str = "[proxy]";
    pub const DONE: &str = "[DONE]";
    pub const CHECK: &str = "[check]";
}
