use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

use crate::color::Color;
use crate::pipeline::generate::ColorRole;
use crate::theme::Theme;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Black or white, whichever reads better on the given background.
fn contrast_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Print a colored swatch line per role plus the font pairing.
pub fn print(theme: &Theme, out: &mut impl Write) -> Result<()> {
    out.queue(Print(format!("theme for \"{}\"\n\n", theme.word)))?;

    for role in ColorRole::ALL {
        let color = theme.palette.get(role);
        out.queue(SetBackgroundColor(to_term(color)))?
            .queue(SetForegroundColor(contrast_fg(color)))?
            .queue(Print(format!(" {:^14} ", role.label())))?
            .queue(ResetColor)?;

        let ratio = Color::contrast_ratio(color, theme.palette.background);
        out.queue(Print(format!(
            "  {}  {:<28} contrast {ratio:.1}:1\n",
            color.to_hex(),
            role.description(),
        )))?;
    }

    out.queue(Print(format!(
        "\n  heading  {}\n  body     {}\n",
        theme.fonts.heading, theme.fonts.body
    )))?;
    out.flush()?;
    Ok(())
}
