//! Inline line icons
//!
//! Stroke-only 24x24 glyphs drawn as inline SVG so the card has no asset
//! or font dependency.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Zap,
    Rocket,
    MapPin,
    MessageCircle,
    Github,
}

impl IconKind {
    /// Path data, drawn in order
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconKind::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            IconKind::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
            IconKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
        }
    }
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Extra classes for size, color and animation
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon {}", extra),
        _ => "icon".to_string(),
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.kind.paths() {
                path { d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_paths() {
        for kind in [
            IconKind::Zap,
            IconKind::Rocket,
            IconKind::MapPin,
            IconKind::MessageCircle,
            IconKind::Github,
        ] {
            assert!(!kind.paths().is_empty(), "{:?} has no paths", kind);
        }
    }
}
