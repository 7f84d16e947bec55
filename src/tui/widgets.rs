use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::fonts::FontPair;
use crate::pipeline::generate::{ColorRole, Palette};
use crate::theme::Theme;

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

/// Capitalize the first character, the way the preview titles the word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders the four role colors as labeled swatch lines with hex values
/// and contrast ratios against the background.
pub struct SwatchWidget<'a> {
    palette: &'a Palette,
}

impl<'a> SwatchWidget<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for SwatchWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Palette");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(ColorRole::ALL.len() + 1);
        lines.push(Line::from(""));
        for role in ColorRole::ALL {
            let color = self.palette.get(role);
            let swatch = Span::styled(
                format!(" {:^13} ", role.label()),
                Style::default()
                    .bg(to_color(color))
                    .fg(contrast_fg(color)),
            );
            let ratio = AppColor::contrast_ratio(color, self.palette.background);
            lines.push(Line::from(vec![
                Span::raw("  "),
                swatch,
                Span::raw(format!(
                    "  {}  {:<28} {ratio:>5.1}:1",
                    color.to_hex(),
                    role.description(),
                )),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Shows the heading and body font names.
pub struct FontInfoWidget<'a> {
    fonts: &'a FontPair,
}

impl<'a> FontInfoWidget<'a> {
    pub fn new(fonts: &'a FontPair) -> Self {
        Self { fonts }
    }
}

impl Widget for FontInfoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Fonts");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(format!("  heading  {}", self.fonts.heading)),
            Line::from(format!("  body     {}", self.fonts.body)),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// A mock web page rendered in the theme's own colors: heading, body copy,
/// and an accent button, so the palette can be judged in context.
pub struct PreviewWidget<'a> {
    theme: &'a Theme,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = &self.theme.palette;
        let bg = to_color(palette.background);
        let text = to_color(palette.text);
        let accent = to_color(palette.accent);
        let accent_text = to_color(palette.accent_text);
        let word = capitalize(&self.theme.word);

        let block = Block::bordered()
            .title("Preview")
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {word} Design"),
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("  Welcome to {word}"),
                Style::default()
                    .fg(text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  This is how the palette reads on a real page. Colors and",
                Style::default().fg(text),
            )),
            Line::from(Span::styled(
                format!(
                    "  fonts are generated from the word \"{}\".",
                    self.theme.word
                ),
                Style::default().fg(text),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    "  Learn More  ",
                    Style::default().bg(accent).fg(accent_text),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .render(inner, buf);
    }
}
