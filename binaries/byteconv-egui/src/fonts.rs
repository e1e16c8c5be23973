use std::sync::Arc;

use eframe::egui::{FontData, FontDefinitions, FontFamily};
use font_kit::{
    family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource,
};

/// System fonts that cover the Chinese group titles, most preferred first.
const CJK_FONTS: &[(&str, &[&str])] = &[
    (
        "traditional_chinese",
        &[
            "Noto Sans CJK TC",
            "Noto Sans TC",
            "Source Han Sans TW",
            "Microsoft JhengHei",
            "PingFang TC",
        ],
    ),
    (
        "simplified_chinese",
        &["Noto Sans CJK SC", "Noto Sans SC", "Source Han Sans CN"],
    ),
];

/// Attempt to load a system font by any of the given `family_names`, returning the first match.
fn load_font_family(family_names: &[&str]) -> Option<Vec<u8>> {
    let system_source = SystemSource::new();

    for &name in family_names {
        match system_source
            .select_best_match(&[FamilyName::Title(name.to_string())], &Properties::new())
        {
            Ok(h) => match &h {
                Handle::Memory { bytes, .. } => {
                    tracing::debug!("Loaded {name} from memory.");
                    return Some(bytes.to_vec());
                }
                Handle::Path { path, .. } => {
                    tracing::debug!("Loaded {name} from path: {:?}", path);
                    match std::fs::read(path) {
                        Ok(data) => return Some(data),
                        Err(err) => tracing::debug!(error = %err, "could not read {name}"),
                    }
                }
            },
            Err(e) => tracing::debug!("Could not load {}: {:?}", name, e),
        }
    }

    None
}

/// Appends the first available CJK system font to the proportional and
/// monospace families. egui's bundled fonts stay first.
pub fn load_fonts(mut fonts: FontDefinitions) -> FontDefinitions {
    let Some((region, font_data)) = CJK_FONTS
        .iter()
        .find_map(|(region, names)| load_font_family(names).map(|data| (*region, data)))
    else {
        tracing::info!("No CJK system font found, group titles may not render.");
        return fonts;
    };

    tracing::info!("Inserting font {region}");
    fonts
        .font_data
        .insert(region.to_owned(), Arc::new(FontData::from_owned(font_data)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(region.to_owned());
    }

    fonts
}
