use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,   // Purple
    pub comment: Color, // Grey, placeholders and hints
    pub success: Color, // Green
    pub error: Color,   // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color, // Status bar background
    pub output_bg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_disabled: Color,
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(203, 166, 247),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
    output_bg: Color::Rgb(49, 50, 68),
    button_bg: Color::Rgb(88, 91, 112),
    button_fg: Color::Rgb(255, 255, 255),
    button_disabled: Color::Rgb(69, 71, 90),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    title: Color::Rgb(136, 57, 239),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    border_focused: Color::Rgb(223, 142, 29),
    border_normal: Color::Rgb(30, 30, 30),
    bar_bg: Color::Rgb(204, 208, 218),
    output_bg: Color::Rgb(148, 163, 184),
    button_bg: Color::Rgb(71, 85, 105),
    button_fg: Color::Rgb(255, 255, 255),
    button_disabled: Color::Rgb(156, 160, 176),
};

/// Palette for the current mode
pub fn theme_for(dark_mode: bool) -> &'static Theme {
    if dark_mode {
        &DARK_THEME
    } else {
        &LIGHT_THEME
    }
}
