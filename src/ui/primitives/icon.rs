use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Busy,
    Inspect,
    History,
    Vehicle,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Busy) => theme::icons::BUSY,
            (true, Icon::Inspect) => theme::icons::INSPECT,
            (true, Icon::History) => theme::icons::HISTORY,
            (true, Icon::Vehicle) => theme::icons::VEHICLE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Busy) => theme::icons_ascii::BUSY,
            (false, Icon::Inspect) => theme::icons_ascii::INSPECT,
            (false, Icon::History) => theme::icons_ascii::HISTORY,
            (false, Icon::Vehicle) => theme::icons_ascii::VEHICLE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Busy => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Inspect | Icon::History | Icon::Vehicle => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
