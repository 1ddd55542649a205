use tera::Tera;

use crate::config::{AssetsConfig, INDEX_TEMPLATE};
use crate::error::AppError;

/// Initialize the Tera template engine.
///
/// Loads every template under the configured templates directory and checks
/// that the index template is among them, so a broken deployment fails at
/// startup instead of on the first page view.
pub fn init_templates(assets: &AssetsConfig) -> Result<Tera, AppError> {
    let tera = Tera::new(&assets.template_glob())?;

    if !tera.get_template_names().any(|name| name == INDEX_TEMPLATE) {
        return Err(AppError::TemplateMissing(format!(
            "{} (searched {})",
            INDEX_TEMPLATE, assets.templates_dir
        )));
    }

    tracing::debug!(
        templates = tera.get_template_names().count(),
        dir = %assets.templates_dir,
        "Loaded templates"
    );

    Ok(tera)
}
