use super::source::SourceBuilder;
use crate::domain::entities::{Aggregate, Entity};

pub(super) fn emit(aggregate: &Aggregate, entities: &[Entity]) -> String {
    let Some(root) = entities.iter().find(|e| e.id == aggregate.root_entity_id) else {
        return format!("// Missing root entity for aggregate {}", aggregate.name);
    };

    let mut src = SourceBuilder::new();
    src.line("namespace Domain.Aggregates;")
        .line("using Domain.Entities;")
        .blank();
    src.block(format!("public class {}", aggregate.name), |src| {
        src.line(format!("public {} Root {{ get; private set; }}", root.name))
            .blank();

        src.block(format!("public {}({} root)", aggregate.name, root.name), |src| {
            src.line("Root = root ?? throw new ArgumentNullException(nameof(root));")
                .line("EnforceInvariants();");
        });
        src.blank();

        src.block("public void EnforceInvariants()", |src| {
            for (i, invariant) in aggregate.invariants.iter().enumerate() {
                src.line(format!("// Invariant {}: {}", i + 1, invariant))
                    .line("// TODO: Implement validation logic");
            }
        });
        src.blank()
            .line("// Aggregate operations")
            .line("// TODO: Add methods that coordinate changes across the aggregate");
    });
    src.finish()
}
