use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

/// Name under which the Tamil font is registered with egui.
pub const TAMIL_FONT_NAME: &str = "tamil";

/// Where common desktops install a font covering the Tamil block.
const SYSTEM_TAMIL_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansTamil-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-tamil/Lohit-Tamil.ttf",
    "/usr/share/fonts/lohit-tamil/Lohit-Tamil.ttf",
    "/usr/share/fonts/truetype/samyak-fonts/Samyak-Tamil.ttf",
    "/System/Library/Fonts/Supplemental/Tamil Sangam MN.ttc",
    "/System/Library/Fonts/Supplemental/Tamil MN.ttc",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\latha.ttf",
];

/// sfnt version tags of TrueType, OpenType and collection files.
const FONT_SIGNATURES: [&[u8]; 4] = [&[0, 1, 0, 0], b"OTTO", b"true", b"ttcf"];

/// Read a font file, rejecting anything that is not TrueType/OpenType.
pub fn load_font(path: &Path) -> Result<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    ensure!(
        FONT_SIGNATURES.iter().any(|sig| bytes.starts_with(sig)),
        "{} is not a TrueType/OpenType font",
        path.display()
    );
    Ok(bytes)
}

/// The font used for Tamil text.
///
/// An explicit path must load. Without one, the first readable system font
/// from a fixed list is used; `None` means Tamil text will show replacement
/// boxes.
pub fn tamil_font(explicit: Option<&Path>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = explicit {
        let bytes = load_font(path)?;
        log::info!("Using {} for Tamil text", path.display());
        return Ok(Some(bytes));
    }

    let found = SYSTEM_TAMIL_FONTS
        .iter()
        .map(PathBuf::from)
        .filter(|p| p.is_file())
        .find_map(|p| match load_font(&p) {
            Ok(bytes) => {
                log::info!("Using system font {} for Tamil text", p.display());
                Some(bytes)
            }
            Err(e) => {
                log::warn!("{e:#}");
                None
            }
        });

    if found.is_none() {
        log::warn!("No Tamil font found; pass --font <PATH> to render Tamil labels");
    }
    Ok(found)
}

/// egui's default fonts with `font` appended as the last fallback of both families.
pub fn with_tamil_fallback(font: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(TAMIL_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(font)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(TAMIL_FONT_NAME.to_owned());
    }
    fonts
}
