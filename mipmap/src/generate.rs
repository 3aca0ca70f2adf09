use crate::{IconSpec, Scaler, IC_LAUNCHER};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// The source logo does not exist.
#[derive(Debug)]
pub struct MissingSource {
    pub path: PathBuf,
}

impl fmt::Display for MissingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        writeln!(f, "{} not found!", self.path.display())?;
        write!(f, "Please save your logo as '{}' in the project root", name)
    }
}

impl std::error::Error for MissingSource {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedIcon {
    pub density: &'static str,
    pub size: u32,
    pub path: PathBuf,
}

impl fmt::Display for GeneratedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.path.display(), self.size, self.size)
    }
}

pub struct IconGenerator<'a> {
    icon: PathBuf,
    res: PathBuf,
    specs: &'a [IconSpec],
    optimize: bool,
}

impl<'a> IconGenerator<'a> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(icon: P, res: Q) -> Self {
        Self {
            icon: icon.as_ref().to_path_buf(),
            res: res.as_ref().to_path_buf(),
            specs: &IC_LAUNCHER,
            optimize: false,
        }
    }

    pub fn specs(mut self, specs: &'a [IconSpec]) -> Self {
        self.specs = specs;
        self
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn check_source(&self) -> Result<()> {
        if !self.icon.exists() {
            return Err(MissingSource {
                path: self.icon.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Writes one `ic_launcher.png` per `IconSpec`, in table order, calling
    /// `on_icon` after each file is on disk. Nothing is created when the
    /// source is missing.
    pub fn run<F>(&self, mut on_icon: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(&GeneratedIcon) -> Result<()>,
    {
        self.check_source()?;
        let mut scaler = Scaler::open(&self.icon)?;
        if let Some(largest) = self.specs.iter().map(|spec| spec.size).max() {
            if scaler.upscales(largest) {
                tracing::warn!(
                    "{} is smaller than {}x{}, icons will be upscaled",
                    self.icon.display(),
                    largest,
                    largest
                );
            }
        }
        if self.optimize {
            scaler.optimize();
        }
        let mut icons = Vec::with_capacity(self.specs.len());
        for spec in self.specs {
            let dir = spec.dir(&self.res);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create `{}`", dir.display()))?;
            let path = spec.path(&self.res);
            scaler.save(&path, spec.size)?;
            tracing::debug!("wrote {} ({}px)", path.display(), spec.size);
            let icon = GeneratedIcon {
                density: spec.density,
                size: spec.size,
                path,
            };
            on_icon(&icon)?;
            icons.push(icon);
        }
        Ok(icons)
    }
}

pub fn mipmap_ic_launcher<P: AsRef<Path>, Q: AsRef<Path>>(
    icon: P,
    res: Q,
) -> Result<Vec<GeneratedIcon>> {
    IconGenerator::new(icon, res).run(|_| Ok(()))
}
