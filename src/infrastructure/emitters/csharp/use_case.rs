use super::record_member;
use super::source::{comma_list, SourceBuilder};
use crate::domain::entities::{Repository, UseCase};
use crate::domain::services::camel;

/// Field/parameter name for a repository dependency: one leading `I` dropped
fn dependency_name(repo_name: &str) -> String {
    camel(repo_name.strip_prefix('I').unwrap_or(repo_name))
}

pub(super) fn emit(use_case: &UseCase, repositories: &[Repository]) -> String {
    // Unresolved ids are skipped without a trace
    let deps: Vec<(&str, String)> = use_case
        .repo_ids
        .iter()
        .filter_map(|id| repositories.iter().find(|r| &r.id == id))
        .map(|r| (r.name.as_str(), dependency_name(&r.name)))
        .collect();

    let input = &use_case.input;
    let output = &use_case.output;

    let mut src = SourceBuilder::new();
    src.line("namespace Application.UseCases;")
        .line("using Application.Ports;")
        .line("using Domain.Entities;")
        .blank()
        .line(format!(
            "public record {}({});",
            input.name,
            comma_list(input.fields.iter().map(record_member))
        ))
        .line(format!(
            "public record {}({});",
            output.name,
            comma_list(output.fields.iter().map(record_member))
        ))
        .blank();

    src.block(format!("public class {}", use_case.name), |src| {
        if !deps.is_empty() {
            for (repo, dep) in &deps {
                src.line(format!("private readonly {repo} _{dep};"));
            }
            src.blank();
        }

        let params = comma_list(deps.iter().map(|(repo, dep)| format!("{repo} {dep}")));
        src.block(format!("public {}({})", use_case.name, params), |src| {
            for (_, dep) in &deps {
                src.line(format!(
                    "_{dep} = {dep} ?? throw new ArgumentNullException(nameof({dep}));"
                ));
            }
        });
        src.blank();

        src.block(
            format!(
                "public async Task<{}> ExecuteAsync({} request, CancellationToken ct = default)",
                output.name, input.name
            ),
            |src| {
                src.line("// TODO: Implement use case logic")
                    .line("throw new NotImplementedException();");
            },
        );
    });
    src.finish()
}
