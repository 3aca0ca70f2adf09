use std::path::{Path, PathBuf};

/// File name every density directory receives.
pub const IC_LAUNCHER_PNG: &str = "ic_launcher.png";

/// Source logo looked up in the working directory when none is given.
pub const DEFAULT_ICON: &str = "kin_logo.png";

/// Resource directory of a standard gradle android project.
pub const DEFAULT_RES_DIR: &str = "android/app/src/main/res";

/// A required launcher icon: the mipmap directory it lives in and its edge
/// length in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconSpec {
    pub density: &'static str,
    pub size: u32,
}

impl IconSpec {
    pub const fn new(density: &'static str, size: u32) -> Self {
        Self { density, size }
    }

    pub fn dir(&self, res: &Path) -> PathBuf {
        res.join(self.density)
    }

    pub fn path(&self, res: &Path) -> PathBuf {
        self.dir(res).join(IC_LAUNCHER_PNG)
    }
}

pub const IC_LAUNCHER: [IconSpec; 5] = [
    IconSpec::new("mipmap-mdpi", 48),
    IconSpec::new("mipmap-hdpi", 72),
    IconSpec::new("mipmap-xhdpi", 96),
    IconSpec::new("mipmap-xxhdpi", 144),
    IconSpec::new("mipmap-xxxhdpi", 192),
];
