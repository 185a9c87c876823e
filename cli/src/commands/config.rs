//! `energy-setup config` — show the effective project layout.

use std::path::Path;

use anyhow::Result;

use crate::output::OutputContext;
use crate::output::human::HumanRenderer;

/// Run `energy-setup config`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(ctx: &OutputContext, json: bool, project_dir: &Path, python: Option<&str>) -> Result<()> {
    let (layout, source) = super::load_layout(project_dir, python)?;
    if json {
        return crate::output::json::print(&serde_json::json!({
            "source": source.to_string(),
            "layout": layout,
        }));
    }
    HumanRenderer::new(ctx).render_config(&layout, &source);
    Ok(())
}
