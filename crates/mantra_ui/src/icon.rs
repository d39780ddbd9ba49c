//! Centralized icon catalog.
//!
//! Components never embed ad hoc SVG snippets: they name an [`IconName`] and let [`Icon`]
//! render it from the catalog at a pixel size resolved from [`IconSize`].

use leptos::*;

use crate::attrs::FromAttr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers usable in button and input slots.
pub enum IconName {
    /// Magnifying glass.
    Search,
    /// Dismiss/clear cross.
    Dismiss,
    /// Downward chevron.
    ChevronDown,
    /// Rightward chevron.
    ChevronRight,
    /// Plus sign.
    Add,
    /// Checkmark.
    Checkmark,
    /// Circled info mark.
    Info,
    /// Warning triangle.
    Warning,
    /// Funnel filter.
    Filter,
    /// Rightward arrow.
    ArrowRight,
}

impl IconName {
    /// Every icon in catalog order.
    pub const ALL: [IconName; 10] = [
        Self::Search,
        Self::Dismiss,
        Self::ChevronDown,
        Self::ChevronRight,
        Self::Add,
        Self::Checkmark,
        Self::Info,
        Self::Warning,
        Self::Filter,
        Self::ArrowRight,
    ];

    /// Stable token used for attributes and CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Dismiss => "dismiss",
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Add => "add",
            Self::Checkmark => "checkmark",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Filter => "filter",
            Self::ArrowRight => "arrow-right",
        }
    }

    /// Raw SVG body markup on a 24px grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Search => {
                r#"<path d="M10 3a7 7 0 0 1 5.6 11.2l5.1 5.1a1 1 0 0 1-1.4 1.4l-5.1-5.1A7 7 0 1 1 10 3Zm0 2a5 5 0 1 0 0 10 5 5 0 0 0 0-10Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M5.3 5.3a1 1 0 0 1 1.4 0L12 10.6l5.3-5.3a1 1 0 1 1 1.4 1.4L13.4 12l5.3 5.3a1 1 0 0 1-1.4 1.4L12 13.4l-5.3 5.3a1 1 0 0 1-1.4-1.4l5.3-5.3-5.3-5.3a1 1 0 0 1 0-1.4Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M5.3 8.3a1 1 0 0 1 1.4 0L12 13.6l5.3-5.3a1 1 0 1 1 1.4 1.4l-6 6a1 1 0 0 1-1.4 0l-6-6a1 1 0 0 1 0-1.4Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.3 5.3a1 1 0 0 1 1.4 0l6 6a1 1 0 0 1 0 1.4l-6 6a1 1 0 0 1-1.4-1.4l5.3-5.3-5.3-5.3a1 1 0 0 1 0-1.4Z"/>"#
            }
            Self::Add => {
                r#"<path d="M12 4a1 1 0 0 1 1 1v6h6a1 1 0 1 1 0 2h-6v6a1 1 0 1 1-2 0v-6H5a1 1 0 1 1 0-2h6V5a1 1 0 0 1 1-1Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M19.7 6.3a1 1 0 0 1 0 1.4l-10 10a1 1 0 0 1-1.4 0l-4-4a1 1 0 1 1 1.4-1.4L9 15.6l9.3-9.3a1 1 0 0 1 1.4 0Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 2a8 8 0 1 0 0 16 8 8 0 0 0 0-16Zm0 6a1 1 0 0 1 1 1v5a1 1 0 1 1-2 0v-5a1 1 0 0 1 1-1Zm0-3.5a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M10.3 3.9a2 2 0 0 1 3.4 0l8 14A2 2 0 0 1 20 21H4a2 2 0 0 1-1.7-3.1l8-14ZM12 9a1 1 0 0 0-1 1v4a1 1 0 1 0 2 0v-4a1 1 0 0 0-1-1Zm0 7.5a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Z"/>"#
            }
            Self::Filter => {
                r#"<path d="M3 5a1 1 0 0 1 1-1h16a1 1 0 0 1 .8 1.6L15 13.3V19a1 1 0 0 1-.6.9l-4 2A1 1 0 0 1 9 21v-7.7L3.2 5.6A1 1 0 0 1 3 5Zm3 1 4.8 6.4a1 1 0 0 1 .2.6v6.4l2-1V13a1 1 0 0 1 .2-.6L18 6H6Z"/>"#
            }
            Self::ArrowRight => {
                r#"<path d="M13.3 5.3a1 1 0 0 1 1.4 0l6 6a1 1 0 0 1 0 1.4l-6 6a1 1 0 0 1-1.4-1.4l4.3-4.3H4a1 1 0 1 1 0-2h13.6l-4.3-4.3a1 1 0 0 1 0-1.4Z"/>"#
            }
        }
    }
}

impl FromAttr for IconName {
    fn from_attr(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|icon| icon.token() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Rendered pixel size.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="mnt-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_unique_token_and_path_body() {
        let mut tokens = std::collections::HashSet::new();
        for icon in IconName::ALL {
            assert!(tokens.insert(icon.token()), "duplicate token {}", icon.token());
            assert!(icon.svg_body().starts_with("<path"));
        }
    }

    #[test]
    fn icon_attribute_tokens_resolve() {
        assert_eq!(IconName::from_attr("chevron-down"), Some(IconName::ChevronDown));
        assert_eq!(IconName::from_attr("sparkles"), None);
    }
}
