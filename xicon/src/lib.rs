use anyhow::Result;
use clap::Parser;
use console::style;
use mipmap::{IconGenerator, DEFAULT_ICON, DEFAULT_RES_DIR};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Source logo to scale.
    #[clap(short, long, default_value = DEFAULT_ICON)]
    pub icon: PathBuf,
    /// Android resource directory receiving the `mipmap-*` folders.
    #[clap(short, long, default_value = DEFAULT_RES_DIR)]
    pub res: PathBuf,
    /// Store icons as grayscale or without alpha when that loses nothing.
    #[clap(long)]
    pub optimize: bool,
}

impl Args {
    pub fn run(&self) -> Result<()> {
        self.run_with(&mut std::io::stdout().lock())
    }

    /// Generates the icons, reporting progress to `out`.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        IconGenerator::new(&self.icon, &self.res)
            .optimize(self.optimize)
            .run(|icon| {
                writeln!(out, "{} Created {}", style("✓").green(), icon)?;
                Ok(())
            })?;
        writeln!(out, "\n✅ All app icons created successfully!")?;
        Ok(())
    }
}
