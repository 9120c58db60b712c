use serde::{Deserialize, Serialize};

/// Light/dark visual theme. Affects style selection only, never content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Value used for the `data-theme` and `color-scheme` document hints.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon on the toggle button: the sun offers a way out of dark mode, the moon out of light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Tailwind class strings for every themed slot of the page.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub toggle: &'static str,
    pub panel: &'static str,
    pub card: &'static str,
    pub tile: &'static str,
    pub item: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub ring: &'static str,
    pub button: &'static str,
    pub contact_card: &'static str,
    pub contact_button: &'static str,
    pub row: &'static str,
    pub marker: &'static str,
}

const DARK: Palette = Palette {
    page: "bg-gradient-to-br from-black via-zinc-900 to-black text-white",
    toggle: "bg-zinc-800 hover:bg-zinc-700 text-yellow-400",
    panel: "bg-zinc-900/50 border-zinc-800",
    card: "bg-zinc-900/50 border-zinc-800 hover:bg-zinc-800/50",
    tile: "bg-zinc-800/50",
    item: "bg-zinc-800/30 border-zinc-700 hover:bg-zinc-800/60",
    link: "hover:underline text-blue-300",
    icon: "text-blue-500",
    body: "text-gray-300",
    muted: "text-gray-400",
    ring: "ring-blue-600",
    button: "bg-blue-600 hover:bg-blue-700 text-white",
    contact_card: "bg-gradient-to-br from-blue-900/40 to-cyan-900/40 border-blue-800",
    contact_button: "bg-blue-600/80 hover:bg-blue-600 text-white border-blue-500",
    row: "hover:bg-zinc-800/50",
    marker: "bg-gray-600 group-hover:bg-blue-500",
};

const LIGHT: Palette = Palette {
    page: "bg-gradient-to-br from-white via-blue-50 to-slate-100 text-gray-900",
    toggle: "bg-blue-100 hover:bg-blue-200 text-blue-600",
    panel: "bg-white/50 border-blue-200",
    card: "bg-white/50 border-blue-200 hover:bg-white/80",
    tile: "bg-blue-100/50",
    item: "bg-blue-50/50 border-blue-300 hover:bg-blue-100/50",
    link: "hover:underline text-blue-700",
    icon: "text-blue-600",
    body: "text-gray-700",
    muted: "text-gray-600",
    ring: "ring-blue-400",
    button: "bg-blue-500 hover:bg-blue-600 text-white",
    contact_card: "bg-gradient-to-br from-blue-200/50 to-cyan-200/50 border-blue-300",
    contact_button: "bg-blue-500/80 hover:bg-blue-600 text-white border-blue-400",
    row: "hover:bg-blue-100/50",
    marker: "bg-gray-400 group-hover:bg-blue-500",
};
