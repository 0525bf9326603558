use super::source::{comma_list, SourceBuilder};
use super::type_name;
use crate::domain::entities::{Entity, EntityField, ValueObject};
use crate::domain::services::{camel, pascal};

/// A field with its C# type, `None` when the referenced value object is missing
struct Resolved<'a> {
    name: &'a str,
    ty: Option<&'a str>,
}

fn resolve<'a>(field: &'a EntityField, value_objects: &'a [ValueObject]) -> Resolved<'a> {
    let ty = match field {
        EntityField::Primitive { ty, .. } => Some(type_name(*ty)),
        EntityField::ValueObject { vo_id, .. } => value_objects
            .iter()
            .find(|vo| &vo.id == vo_id)
            .map(|vo| vo.name.as_str()),
    };
    Resolved {
        name: field.name(),
        ty,
    }
}

pub(super) fn emit(entity: &Entity, value_objects: &[ValueObject]) -> String {
    let fields: Vec<_> = entity
        .fields
        .iter()
        .map(|f| resolve(f, value_objects))
        .collect();

    let params = comma_list(fields.iter().filter_map(|f| {
        f.ty.map(|ty| format!("{} {}", ty, camel(f.name)))
    }));
    let id_init = if entity.id_type.is_guid() {
        "Guid.NewGuid()"
    } else {
        "default"
    };

    let mut src = SourceBuilder::new();
    src.line("namespace Domain.Entities;")
        .line("using Domain.ValueObjects;")
        .blank();
    src.block(format!("public class {}", entity.name), |src| {
        src.line(format!(
            "public {} Id {{ get; private set; }}",
            type_name(entity.id_type)
        ));
        for field in &fields {
            match field.ty {
                Some(ty) => src.line(format!(
                    "public {} {} {{ get; private set; }}",
                    ty,
                    pascal(field.name)
                )),
                None => src.line(format!("// Missing VO: {}", field.name)),
            };
        }
        src.blank();

        src.block(format!("public {}({})", entity.name, params), |src| {
            src.line(format!("Id = {id_init};"));
            for field in fields.iter().filter(|f| f.ty.is_some()) {
                src.line(format!("{} = {};", pascal(field.name), camel(field.name)));
            }
        });
        src.blank()
            .line("// Domain methods")
            .line("// TODO: Add behavior methods that enforce business rules");
    });
    src.finish()
}
