use is_terminal::IsTerminal;

/// What the attached terminal can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    /// No color, unicode icons; what tests and pipes get
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            supports_color: false,
            supports_unicode: true,
        }
    }
}

/// Detect capabilities of stdout, honouring `--no-color`
pub fn detect_capabilities(no_color_flag: bool) -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        no_color_flag,
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    no_color_flag: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = no_color_flag
        || get_env("NO_COLOR").is_some()
        || get_env("REDEPLOY_NO_COLOR").is_some_and(|v| v != "0" && !v.is_empty());

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb,
    }
}
