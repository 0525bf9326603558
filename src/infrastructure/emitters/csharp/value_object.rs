use super::source::{comma_list, SourceBuilder};
use super::{record_member, type_name};
use crate::domain::entities::{Field, ValueObject};
use crate::domain::services::{camel, pascal};
use crate::domain::value_objects::Primitive;

pub(super) fn emit(vo: &ValueObject) -> String {
    let members = comma_list(vo.fields.iter().map(record_member));
    let params = comma_list(
        vo.fields
            .iter()
            .map(|f| format!("{} {}", type_name(f.ty), camel(&f.name))),
    );
    let args = comma_list(vo.fields.iter().map(|f| camel(&f.name)));

    let mut src = SourceBuilder::new();
    src.line("namespace Domain.ValueObjects;").blank();
    src.block(
        format!("public readonly record struct {}({})", vo.name, members),
        |src| {
            src.block(format!("public static {} Create({})", vo.name, params), |src| {
                src.lines(vo.fields.iter().filter_map(guard));
                src.line(format!("return new {}({});", vo.name, args));
            });
        },
    );
    src.finish()
}

/// Factory guard for a field; only decimals and strings are checked
fn guard(field: &Field) -> Option<String> {
    let param = camel(&field.name);
    let label = pascal(&field.name);
    match field.ty {
        Primitive::Decimal => Some(format!(
            "if ({param} < 0) throw new ArgumentException(\"{label} cannot be negative\");"
        )),
        Primitive::String => Some(format!(
            "if (string.IsNullOrWhiteSpace({param})) throw new ArgumentException(\"{label} is required\");"
        )),
        _ => None,
    }
}
