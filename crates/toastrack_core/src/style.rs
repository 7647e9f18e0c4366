//! Styling intent and the theme resolver seam
//!
//! The core never produces visual styles itself. A toast carries a
//! [`ToastStyle`] (what the producer asked for) and the presentation layer
//! supplies a [`ThemeResolver`] that turns style + slot into class strings.

use std::fmt;

/// Semantic color of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastColor {
    #[default]
    Default,
    Foreground,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// Surface treatment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastVariant {
    #[default]
    Flat,
    Bordered,
    Solid,
}

/// Corner rounding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastRadius {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

/// Built-in icon shown when the producer did not supply one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefaultIcon {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastColor::Default => "default",
            ToastColor::Foreground => "foreground",
            ToastColor::Primary => "primary",
            ToastColor::Secondary => "secondary",
            ToastColor::Success => "success",
            ToastColor::Warning => "warning",
            ToastColor::Danger => "danger",
        }
    }

    /// Icon drawn for this color when none is supplied
    pub fn default_icon(&self) -> Option<DefaultIcon> {
        match self {
            ToastColor::Primary | ToastColor::Secondary => Some(DefaultIcon::Info),
            ToastColor::Success => Some(DefaultIcon::Success),
            ToastColor::Warning => Some(DefaultIcon::Warning),
            ToastColor::Danger => Some(DefaultIcon::Danger),
            ToastColor::Default | ToastColor::Foreground => None,
        }
    }
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Flat => "flat",
            ToastVariant::Bordered => "bordered",
            ToastVariant::Solid => "solid",
        }
    }
}

impl ToastRadius {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastRadius::None => "none",
            ToastRadius::Sm => "sm",
            ToastRadius::Md => "md",
            ToastRadius::Lg => "lg",
            ToastRadius::Full => "full",
        }
    }
}

/// Styling intent attached to a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToastStyle {
    pub color: ToastColor,
    pub variant: ToastVariant,
    pub radius: ToastRadius,
    pub hide_icon: bool,
}

impl ToastStyle {
    pub fn color(mut self, color: ToastColor) -> Self {
        self.color = color;
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn radius(mut self, radius: ToastRadius) -> Self {
        self.radius = radius;
        self
    }

    pub fn hide_icon(mut self, hide: bool) -> Self {
        self.hide_icon = hide;
        self
    }
}

/// Which icon a toast should render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconChoice {
    None,
    Loading,
    Custom(String),
    Builtin(DefaultIcon),
}

/// Pick the icon for a toast.
///
/// `hide_icon` wins over everything, a loading toast shows the loading icon,
/// a custom icon overrides the color's default.
pub fn resolve_icon(style: &ToastStyle, custom: Option<&str>, loading: bool) -> IconChoice {
    if style.hide_icon {
        return IconChoice::None;
    }
    if loading {
        return IconChoice::Loading;
    }
    if let Some(icon) = custom {
        return IconChoice::Custom(icon.to_string());
    }
    style
        .color
        .default_icon()
        .map_or(IconChoice::None, IconChoice::Builtin)
}

/// Named parts of a rendered toast
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastSlot {
    Base,
    Title,
    Description,
    Icon,
    LoadingIcon,
    Content,
    ProgressTrack,
    ProgressIndicator,
    Motion,
    CloseButton,
    CloseIcon,
}

impl ToastSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastSlot::Base => "base",
            ToastSlot::Title => "title",
            ToastSlot::Description => "description",
            ToastSlot::Icon => "icon",
            ToastSlot::LoadingIcon => "loading-icon",
            ToastSlot::Content => "content",
            ToastSlot::ProgressTrack => "progress-track",
            ToastSlot::ProgressIndicator => "progress-indicator",
            ToastSlot::Motion => "motion",
            ToastSlot::CloseButton => "close-button",
            ToastSlot::CloseIcon => "close-icon",
        }
    }
}

impl fmt::Display for ToastSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps styling intent to class strings for one slot
pub trait ThemeResolver {
    fn classes(&self, style: &ToastStyle, slot: ToastSlot) -> String;
}

impl<F> ThemeResolver for F
where
    F: Fn(&ToastStyle, ToastSlot) -> String,
{
    fn classes(&self, style: &ToastStyle, slot: ToastSlot) -> String {
        self(style, slot)
    }
}

/// BEM-style resolver: `toast__<slot>` plus color/variant/radius modifiers on the base slot
#[derive(Clone, Debug)]
pub struct SlotClassResolver {
    prefix: String,
}

impl SlotClassResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for SlotClassResolver {
    fn default() -> Self {
        Self::new("toast")
    }
}

impl ThemeResolver for SlotClassResolver {
    fn classes(&self, style: &ToastStyle, slot: ToastSlot) -> String {
        let p = &self.prefix;
        match slot {
            ToastSlot::Base => format!(
                "{p}__base {p}--{} {p}--{} {p}--radius-{}",
                style.color.as_str(),
                style.variant.as_str(),
                style.radius.as_str()
            ),
            ToastSlot::Icon | ToastSlot::ProgressIndicator => {
                format!("{p}__{slot} {p}__{slot}--{}", style.color.as_str())
            }
            _ => format!("{p}__{slot}"),
        }
    }
}
