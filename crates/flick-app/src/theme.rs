//! Theme configuration for the app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_screen: &'static str,
    pub bg_panel: &'static str,
    pub bg_row: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

/// The single fixed palette
///
/// `bg_screen` is the screen's fixed background color; everything else
/// follows the same flat black-on-white look.
pub const PALETTE: ColorPalette = ColorPalette {
    bg_screen: "#FAFBFF",
    bg_panel: "#ffffff",
    bg_row: "#ffffff",
    text_primary: "#000000",
    text_muted: "#9aa0a6",
    border: "#000000",
    shadow: "rgba(0, 0, 0, 0.08)",
};
