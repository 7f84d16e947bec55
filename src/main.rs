use anyhow::Result;
use clap::Parser;

use chromaword::cli::Args;
use chromaword::theme::Theme;
use chromaword::{preview, tui};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.tui {
        let app = tui::TuiApp::new(&args.word, args.refresh)?;
        return tui::run(app);
    }

    let theme = Theme::generate(&args.word, args.refresh)?;

    if args.preview {
        preview::print(&theme, &mut std::io::stdout())?;
        return Ok(());
    }

    if let Some(path) = &args.output {
        theme.write_to(path)?;
        eprintln!("wrote {}", path.display());
    } else if args.snippet {
        print!("{}", theme.css_snippet());
    } else {
        print!("{}", theme.to_css());
    }

    Ok(())
}
