//! Poster cards along the horizontal carousel
//!
//! Each card is drawn into its own scratch buffer and copied onto the
//! screen, so cards that hang off either edge are clipped cell by cell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use reelview_core::motion::arc_lift;
use reelview_core::MovieRecord;

use super::truncate;
use crate::app::App;
use crate::images::Raster;
use crate::theme::{placeholder, Theme};

/// Title, stars, genres, spacer and three description lines
const TEXT_ROWS: u16 = 7;
const DESCRIPTION_ROWS: u16 = 3;
/// Poster rows per content column (2:3 poster on 1:2 cells)
const POSTER_ASPECT: f64 = 0.75;

pub struct CarouselWidget;

/// Size and resting position of every card for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardLayout {
    width: u16,
    height: u16,
    poster_rows: u16,
}

impl CardLayout {
    fn new(item_size: f64, area_height: u16, arc_rows: u16) -> Self {
        // One column of gap on each side of the card
        let width = (item_size.floor() as u16).saturating_sub(2);
        let inner_width = width.saturating_sub(2);
        let wanted_poster = (inner_width as f64 * POSTER_ASPECT).round() as u16;
        let available = area_height.saturating_sub(arc_rows);
        let height = (wanted_poster + TEXT_ROWS + 2).min(available);
        let poster_rows = height.saturating_sub(TEXT_ROWS + 2);
        Self {
            width,
            height,
            poster_rows,
        }
    }

    /// Top row relative to the area for a given arc lift in [0, 1]
    fn top(&self, area_height: u16, arc_rows: u16, lift: f64) -> i32 {
        let raise = (lift * arc_rows as f64).round() as i32;
        area_height as i32 - self.height as i32 - raise
    }
}

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(carousel) = app.frame.clone() else { return };
        let arc_rows = app.config.ui.arc_rows;
        let layout = CardLayout::new(carousel.metrics.item_size, area.height, arc_rows);
        if layout.width < 3 || layout.height < 3 {
            return;
        }

        for transform in &carousel.items {
            let x = (carousel.screen_x(transform.index).round() as i32) + 1;
            if x + layout.width as i32 <= 0 || x >= area.width as i32 {
                continue;
            }
            let Some(movie) = app
                .display_list
                .as_ref()
                .and_then(|l| l.get(transform.index))
                .and_then(|e| e.movie())
                .cloned()
            else {
                continue;
            };

            let inner_width = layout.width.saturating_sub(2);
            let raster = movie
                .poster
                .as_deref()
                .and_then(|uri| app.images.raster(uri, inner_width, layout.poster_rows));

            let centered = carousel.centered == Some(transform.index);
            let card = render_card(&movie, layout, raster.as_deref(), &app.theme, centered);

            let y = layout.top(area.height, arc_rows, arc_lift(transform.translate_y));
            blit(&card, frame.buffer_mut(), area, x, y);
        }
    }
}

/// Draw one card into a scratch buffer at the origin
fn render_card(
    movie: &MovieRecord,
    layout: CardLayout,
    poster: Option<&Raster>,
    theme: &Theme,
    centered: bool,
) -> Buffer {
    let rect = Rect::new(0, 0, layout.width, layout.height);
    let mut buf = Buffer::empty(rect);

    let border = if centered {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(theme.card));
    let inner = block.inner(rect);
    block.render(rect, &mut buf);

    let poster_rect = Rect::new(inner.x, inner.y, inner.width, layout.poster_rows.min(inner.height));
    draw_poster(&mut buf, poster_rect, poster, placeholder(&movie.key, theme.card));

    let mut y = poster_rect.bottom();
    let width = inner.width as usize;
    let base = Style::default().bg(theme.card);

    let lines = [
        Line::from(Span::styled(
            truncate(&movie.title, width),
            base.fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        rating_line(movie, theme),
        Line::from(Span::styled(
            truncate(&movie.genres.join(" · "), width),
            base.fg(theme.muted),
        )),
    ];
    for line in lines {
        if y >= inner.bottom() {
            return buf;
        }
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(base)
            .render(Rect::new(inner.x, y, inner.width, 1), &mut buf);
        y += 1;
    }

    // Blank row before the description
    y += 1;
    if y < inner.bottom() {
        let rows = DESCRIPTION_ROWS.min(inner.bottom() - y);
        Paragraph::new(movie.description.as_str())
            .style(base.fg(theme.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, y, inner.width, rows), &mut buf);
    }

    buf
}

fn rating_line(movie: &MovieRecord, theme: &Theme) -> Line<'static> {
    let filled = movie.filled_stars().min(5);
    let style = Style::default().bg(theme.card);
    Line::from(vec![
        Span::styled("★".repeat(filled), style.fg(theme.accent)),
        Span::styled("☆".repeat(5 - filled), style.fg(theme.muted)),
        Span::styled(format!(" {:.1}", movie.clamped_rating()), style.fg(theme.text)),
    ])
}

fn draw_poster(
    buf: &mut Buffer,
    rect: Rect,
    raster: Option<&Raster>,
    fallback: Color,
) {
    for row in 0..rect.height {
        for col in 0..rect.width {
            let Some(cell) = buf.cell_mut((rect.x + col, rect.y + row)) else { continue };
            match raster.and_then(|r| r.cell(col, row)) {
                Some((top, bottom)) => {
                    cell.set_symbol("▀")
                        .set_fg(Color::Rgb(top.0, top.1, top.2))
                        .set_bg(Color::Rgb(bottom.0, bottom.1, bottom.2));
                }
                None => {
                    cell.set_symbol(" ").set_bg(fallback);
                }
            }
        }
    }
}

/// Copy `card` onto `target` with its origin at (`x`, `y`) relative to `area`
fn blit(card: &Buffer, target: &mut Buffer, area: Rect, x: i32, y: i32) {
    let size = card.area;
    for dy in 0..size.height {
        let ty = y + dy as i32;
        if ty < 0 || ty >= area.height as i32 {
            continue;
        }
        for dx in 0..size.width {
            let tx = x + dx as i32;
            if tx < 0 || tx >= area.width as i32 {
                continue;
            }
            let (Some(src), Some(dst)) = (
                card.cell((dx, dy)),
                target.cell_mut((area.x + tx as u16, area.y + ty as u16)),
            ) else {
                continue;
            };
            *dst = src.clone();
        }
    }
}
