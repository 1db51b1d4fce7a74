use std::path::Path;

use tera::{Context, Tera};

use crate::error::ExportError;
use crate::snapshot::ReportSnapshot;

const BUILTIN_NAME: &str = "report.md";
const BUILTIN_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render a caller-supplied Tera template with a report snapshot.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The snapshot fields become the template context variables.
pub fn render_report_with(
    template_name: &str,
    template_content: &str,
    snapshot: &ReportSnapshot,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(snapshot)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render with the built-in Markdown report template.
pub fn render_report(snapshot: &ReportSnapshot) -> Result<String, ExportError> {
    render_report_with(BUILTIN_NAME, BUILTIN_TEMPLATE, snapshot)
}

/// Read a custom template from disk.
pub fn load_template(path: &Path) -> Result<String, ExportError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ExportError::TemplateNotFound(path.display().to_string())
        } else {
            ExportError::TemplateRead {
                path: path.display().to_string(),
                source,
            }
        }
    })
}
