use std::collections::HashMap;

use tera::{Context, Tera, Value};

use crate::error::ExportError;
use crate::report::{FOOTER, GENERATED_LABEL, Report};

const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Markdown-ish layout consumed by [`crate::docx::generate_docx`].
pub const REPORT_TEMPLATE: &str = r#"# {{ report.title }}
## {{ report.subject }}
{{ generated_label }}: {{ report.generated_at }}
{% for section in report.sections %}
## {{ section.title }}
{% for row in section.rows %}- **{{ row.label | inline }}:** {{ row.value | inline }}
{% endfor %}{% endfor %}
{{ footer }}
"#;

/// Render a report through the built-in Tera template.
pub fn render_markdown(report: &Report) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, report)
}

/// Render a report with a caller-supplied template.
///
/// The report is exposed as `report`, plus `generated_label` and `footer`.
/// The `inline` filter escapes emphasis markers in free text.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &Report,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("inline", inline_filter);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("report", report);
    context.insert("generated_label", GENERATED_LABEL);
    context.insert("footer", FOOTER);

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn inline_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => escape_inline(s),
        other => escape_inline(&other.to_string()),
    };
    Ok(Value::String(text))
}

/// Backslash-escape `\` and `*` so stored text never toggles bold.
pub fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
