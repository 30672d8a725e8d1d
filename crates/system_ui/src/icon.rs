//! Centralized icon names and the glyph-backed [`Icon`] primitive.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon identifiers used by the shell chrome and launcher surfaces.
pub enum IconName {
    /// Person silhouette.
    User,
    /// Open folder.
    Folder,
    /// Briefcase.
    Briefcase,
    /// Sparkle / skills.
    Sparkles,
    /// Envelope.
    Mail,
    /// Terminal prompt.
    Terminal,
    /// Gear.
    Settings,
    /// File cabinet.
    Files,
    /// Music note.
    Music,
    /// Minimize window control.
    Minimize,
    /// Maximize window control.
    Maximize,
    /// Restore-from-maximized window control.
    Restore,
    /// Close window control.
    Close,
    /// Generic document fallback.
    Document,
}

impl IconName {
    /// Stable token written to `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Folder => "folder",
            Self::Briefcase => "briefcase",
            Self::Sparkles => "sparkles",
            Self::Mail => "mail",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
            Self::Files => "files",
            Self::Music => "music",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Close => "close",
            Self::Document => "document",
        }
    }

    /// Parses an icon token, as written in content catalogs.
    pub fn from_token(token: &str) -> Option<Self> {
        ALL_ICONS.into_iter().find(|icon| icon.token() == token)
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::Folder => "\u{1F4C2}",
            Self::Briefcase => "\u{1F4BC}",
            Self::Sparkles => "\u{2728}",
            Self::Mail => "\u{2709}",
            Self::Terminal => ">_",
            Self::Settings => "\u{2699}",
            Self::Files => "\u{1F5C4}",
            Self::Music => "\u{266B}",
            Self::Minimize => "\u{2013}",
            Self::Maximize => "\u{25A1}",
            Self::Restore => "\u{2750}",
            Self::Close => "\u{2715}",
            Self::Document => "\u{1F4C4}",
        }
    }
}

const ALL_ICONS: [IconName; 14] = [
    IconName::User,
    IconName::Folder,
    IconName::Briefcase,
    IconName::Sparkles,
    IconName::Mail,
    IconName::Terminal,
    IconName::Settings,
    IconName::Files,
    IconName::Music,
    IconName::Minimize,
    IconName::Maximize,
    IconName::Restore,
    IconName::Close,
    IconName::Document,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon size tokens.
pub enum IconSize {
    /// Inline/control size.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Launcher size.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph. Always `aria-hidden`; label the surrounding control instead.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
