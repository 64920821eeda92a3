use crossterm::style::Stylize;

use crate::domain::value_objects::StepKind;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Start,
    Source,
    Container,
    Static,
    Proxy,
    Done,
    Check,
}

impl Icon {
    /// Banner icon for a step
    pub fn for_step(step: StepKind) -> Self {
        match step {
            StepKind::SourceSync => Icon::Source,
            StepKind::ServiceRebuild => Icon::Container,
            StepKind::StaticAssetSync => Icon::Static,
            StepKind::ProxyReload => Icon::Proxy,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Start) => theme::icons::START,
            (true, Icon::Source) => theme::icons::SOURCE,
            (true, Icon::Container) => theme::icons::CONTAINER,
            (true, Icon::Static) => theme::icons::STATIC,
            (true, Icon::Proxy) => theme::icons::PROXY,
            (true, Icon::Done) => theme::icons::DONE,
            (true, Icon::Check) => theme::icons::CHECK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Start) => theme::icons_ascii::START,
            (false, Icon::Source) => theme::icons_ascii::SOURCE,
            (false, Icon::Container) => theme::icons_ascii::CONTAINER,
            (false, Icon::Static) => theme::icons_ascii::STATIC,
            (false, Icon::Proxy) => theme::icons_ascii::PROXY,
            (false, Icon::Done) => theme::icons_ascii::DONE,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Done => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Start
            | Icon::Source
            | Icon::Container
            | Icon::Static
            | Icon::Proxy
            | Icon::Check => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
