//! `linklist show` - print a link block as form data.

use tracing::instrument;

use linklist_core::domain::{Language, LinkBlockFields};

use crate::{
    cli::ShowArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::build_service(&config)?;
    let form = service.load(args.id)?;

    if output.is_json() {
        return output.json(&form);
    }

    let Some(fields) = form.payload() else {
        return Err(CliError::InvalidInput {
            message: format!("link block {} has no form data", args.id),
            source: None,
        });
    };

    for line in render(fields, service.languages()) {
        output.print(&line)?;
    }
    Ok(())
}

fn render(fields: &LinkBlockFields, languages: &[Language]) -> Vec<String> {
    let id = fields
        .id_link_block
        .map(|id| id.to_string())
        .unwrap_or_else(|| "new".into());

    let mut lines = vec![
        format!("Link block #{id}"),
        format!("  hook:    {}", fields.id_hook),
    ];

    for language in languages {
        let name = fields.block_name.get(language.id_lang).unwrap_or("(missing)");
        lines.push(format!("  name[{}]: {}", language.iso_code, name));
    }

    lines.push(format!("  cms:     {}", join(&fields.cms)));
    lines.push(format!("  product: {}", join(&fields.product)));
    lines.push(format!("  static:  {}", join(&fields.static_pages)));
    lines
}

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".into();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use linklist_core::domain::{HookId, LinkBlockId, LocalizedName};

    #[test]
    fn render_lists_every_language() {
        let fields = LinkBlockFields {
            id_link_block: Some(LinkBlockId::new(4)),
            block_name: LocalizedName::new().with(1, "Shop"),
            id_hook: HookId::new(1),
            cms: vec![2, 3],
            product: vec![],
            static_pages: vec!["contact".into()],
        };
        let languages = [Language::new(1, "en"), Language::new(2, "fr")];

        let lines = render(&fields, &languages);
        assert_eq!(lines[0], "Link block #4");
        assert!(lines.contains(&"  name[en]: Shop".to_string()));
        assert!(lines.contains(&"  name[fr]: (missing)".to_string()));
        assert!(lines.contains(&"  cms:     2, 3".to_string()));
        assert!(lines.contains(&"  product: -".to_string()));
    }
}
