//! Closed configuration token sets and class-string composition.

use crate::attrs::FromAttr;
use crate::IconSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Component size scale shared by every sized primitive.
pub enum Size {
    /// Dense control.
    Small,
    /// Default control.
    Medium,
    /// Large control.
    Large,
}

impl Default for Size {
    fn default() -> Self {
        Self::Medium
    }
}

impl Size {
    /// Stable token used in class fragments and attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Icon size paired with this control size.
    pub const fn icon_size(self) -> IconSize {
        match self {
            Self::Small => IconSize::Sm,
            Self::Medium => IconSize::Md,
            Self::Large => IconSize::Lg,
        }
    }
}

impl FromAttr for Size {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual treatment of a mantra [`crate::Button`].
pub enum ButtonVariant {
    /// Solid background.
    Filled,
    /// Border only.
    Outline,
    /// Text only, no container.
    Text,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Filled
    }
}

impl ButtonVariant {
    /// Stable token used in class fragments and attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outline => "outline",
            Self::Text => "text",
        }
    }
}

impl FromAttr for ButtonVariant {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "filled" => Some(Self::Filled),
            "outline" => Some(Self::Outline),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Brand color family of a mantra [`crate::Button`].
pub enum ButtonColor {
    /// Brand primary.
    Primary,
    /// Brand secondary.
    Secondary,
    /// Neutral grey.
    Neutral,
    /// Destructive red.
    Danger,
    /// Confirmation green.
    Success,
}

impl Default for ButtonColor {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonColor {
    /// Stable token used in class fragments and attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

impl FromAttr for ButtonColor {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "neutral" => Some(Self::Neutral),
            "danger" => Some(Self::Danger),
            "success" => Some(Self::Success),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Hierarchy levels of the Yooga-branded [`crate::YooButton`].
pub enum YooButtonVariant {
    /// Main call to action.
    Primary,
    /// Secondary action.
    Secondary,
    /// Low-emphasis action.
    Tertiary,
    /// Inline link-looking action.
    Link,
}

impl Default for YooButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl YooButtonVariant {
    /// Stable token used in class fragments and attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Link => "link",
        }
    }
}

impl FromAttr for YooButtonVariant {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "tertiary" => Some(Self::Tertiary),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Static placement of a tooltip bubble relative to its trigger.
pub enum TooltipPosition {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Default for TooltipPosition {
    fn default() -> Self {
        Self::Top
    }
}

impl TooltipPosition {
    /// Stable token used in class fragments and attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromAttr for TooltipPosition {
    fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Space-separated class list builder.
///
/// Fragments are appended in call order; the output never has leading, trailing, or doubled
/// spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Starts a list with its base class.
    pub fn new(base: &str) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    /// Appends `fragment` when non-empty.
    pub fn push(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if !fragment.is_empty() {
            self.classes.push(fragment.to_string());
        }
    }

    /// Appends `<base>-<token>` when `token` is present.
    pub fn modifier(mut self, base: &str, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.push(&format!("{base}-{token}"));
        }
        self
    }

    /// Appends `<base>-<suffix>` when `enabled`.
    pub fn flag(mut self, base: &str, suffix: &str, enabled: bool) -> Self {
        if enabled {
            self.push(&format!("{base}-{suffix}"));
        }
        self
    }

    /// Appends a caller-supplied extra class, if any.
    pub fn extra(mut self, class: Option<&str>) -> Self {
        if let Some(class) = class {
            self.push(class);
        }
        self
    }

    /// Joined class string.
    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_list_skips_absent_fragments() {
        let classes = ClassList::new("mnt-input-group")
            .modifier("mnt-input-group", None)
            .flag("mnt-input-group", "disabled", true)
            .extra(Some("  "))
            .build();

        assert_eq!(classes, "mnt-input-group mnt-input-group-disabled");
    }

    #[test]
    fn token_parsing_round_trips_every_variant() {
        for size in [Size::Small, Size::Medium, Size::Large] {
            assert_eq!(Size::from_attr(size.token()), Some(size));
        }
        for position in [
            TooltipPosition::Top,
            TooltipPosition::Bottom,
            TooltipPosition::Left,
            TooltipPosition::Right,
        ] {
            assert_eq!(TooltipPosition::from_attr(position.token()), Some(position));
        }
        assert_eq!(ButtonColor::from_attr("magenta"), None);
    }

    #[test]
    fn sizes_map_to_icon_pixels() {
        assert_eq!(Size::Small.icon_size().px(), 16);
        assert_eq!(Size::Medium.icon_size().px(), 20);
        assert_eq!(Size::Large.icon_size().px(), 24);
    }
}
