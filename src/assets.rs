//! Static CSV assets: icon, example resources and long description

use crate::{CsvGenError, CsvGenResult};
use olm_manifest::CsvAssets;
use std::path::Path;
use tracing::{debug, warn};

pub const ALM_EXAMPLES_FILE: &str = "alm-examples";
pub const DESCRIPTION_FILE: &str = "description";
pub const ICON_FILE: &str = "icon";

/// Load the assets for a branding target (`community` or `productized`).
///
/// Missing files contribute an empty value. A present `alm-examples` file
/// must hold valid JSON.
pub fn load_assets(assets_dir: &Path, target: &str) -> CsvGenResult<CsvAssets> {
    let alm_path = assets_dir.join(ALM_EXAMPLES_FILE);
    let alm_examples = read_optional(&alm_path)?;
    if !alm_examples.trim().is_empty() {
        serde_json::from_str::<serde_json::Value>(&alm_examples).map_err(|e| {
            CsvGenError::InvalidAsset {
                path: alm_path.clone(),
                message: e.to_string(),
            }
        })?;
    }

    let description = read_optional(&assets_dir.join(target).join(DESCRIPTION_FILE))?;
    let icon = read_optional(&assets_dir.join(ICON_FILE))?.trim().to_string();

    debug!(
        "Loaded assets from {:?} for target {} (description {} bytes, icon {} bytes)",
        assets_dir,
        target,
        description.len(),
        icon.len()
    );

    Ok(CsvAssets {
        alm_examples,
        description,
        icon,
    })
}

fn read_optional(path: &Path) -> CsvGenResult<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Asset {:?} not found, using an empty value", path);
            Ok(String::new())
        }
        Err(e) => Err(CsvGenError::Io(e)),
    }
}
