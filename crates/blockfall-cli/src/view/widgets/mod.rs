use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{
    block_display::*, board_display::*, piece_display::*, session_display::*, stats_display::*,
};

mod block_display;
mod board_display;
mod piece_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub(super) const CYAN: Color = Color::Rgb(0, 255, 255);
    pub(super) const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub(super) const GREEN: Color = Color::Rgb(0, 255, 0);
    pub(super) const RED: Color = Color::Rgb(255, 0, 0);
    pub(super) const BLUE: Color = Color::Rgb(0, 0, 255);
    pub(super) const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub(super) const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub(super) const GRAY: Color = Color::Rgb(127, 127, 127);
    pub(super) const BLACK: Color = Color::Rgb(0, 0, 0);
    pub(super) const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub(crate) mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub(crate) const EMPTY: Style = bg_only(color::BLACK);
    pub(crate) const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub(crate) const GHOST: Style = fg_bg(color::WHITE, color::BLACK);
    pub(crate) const OVERLAY: Style = fg_bg(color::WHITE, color::BLACK);

    pub(crate) const I_BLOCK: Style = bg_only(color::CYAN);
    pub(crate) const O_BLOCK: Style = bg_only(color::YELLOW);
    pub(crate) const T_BLOCK: Style = bg_only(color::MAGENTA);
    pub(crate) const S_BLOCK: Style = bg_only(color::GREEN);
    pub(crate) const Z_BLOCK: Style = bg_only(color::RED);
    pub(crate) const J_BLOCK: Style = bg_only(color::BLUE);
    pub(crate) const L_BLOCK: Style = bg_only(color::ORANGE);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
