use super::source::SourceBuilder;
use crate::domain::entities::Repository;

pub(super) fn emit(repository: &Repository) -> String {
    let mut src = SourceBuilder::new();
    src.line("namespace Application.Ports;")
        .line("using Domain.Entities;")
        .blank();
    src.block(format!("public interface {}", repository.name), |src| {
        src.lines(repository.methods.iter().map(|m| format!("{};", m.signature)));
    });
    src.finish()
}
