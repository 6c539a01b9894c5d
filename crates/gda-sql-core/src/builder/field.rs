use crate::ast::{Field, FieldItem, FieldOp, ParamSpec, ParamSpecKind, SelectStatement};

/// Builds a field from its item, optional alias and parameter specs.
#[must_use]
pub const fn build_field(
    item: FieldItem,
    alias: Option<String>,
    param_spec: Vec<ParamSpec>,
) -> Field {
    Field {
        item,
        alias,
        param_spec,
    }
}

/// Builds a dotted-name item. Each element of `path` is one segment.
#[must_use]
pub const fn build_field_item_name(path: Vec<String>) -> FieldItem {
    FieldItem::Name(path)
}

/// Builds `left op right`.
#[must_use]
pub fn build_field_item_equation(left: FieldItem, right: FieldItem, op: FieldOp) -> FieldItem {
    FieldItem::Equation {
        left: Box::new(left),
        right: Box::new(right),
        op,
    }
}

/// Builds an inline `(select …)` item.
#[must_use]
pub fn build_field_item_inline_select(select: SelectStatement) -> FieldItem {
    FieldItem::InlineSelect(Box::new(select))
}

/// Builds a function call item. An empty name yields a bare value list.
#[must_use]
pub fn build_field_item_function(name: impl Into<String>, args: Vec<Field>) -> FieldItem {
    FieldItem::Function {
        name: name.into(),
        args,
    }
}

/// Builds one parameter spec entry.
#[must_use]
pub fn build_param_spec(kind: ParamSpecKind, content: impl Into<String>) -> ParamSpec {
    ParamSpec {
        kind,
        content: content.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FieldItem {
        build_field_item_name(vec![String::from(s)])
    }

    #[test]
    fn test_field_with_param_spec() {
        let field = build_field(
            name("id"),
            None,
            vec![
                build_param_spec(ParamSpecKind::Name, "id"),
                build_param_spec(ParamSpecKind::Type, "int"),
            ],
        );
        assert_eq!(field.param(ParamSpecKind::Type), Some("int"));
        assert_eq!(field.param(ParamSpecKind::Descr), None);
        assert_eq!(field.to_string(), "id");
    }

    #[test]
    fn test_equation_owns_both_sides() {
        let eq = build_field_item_equation(name("a"), name("2"), FieldOp::Times);
        assert_eq!(eq.to_string(), "a*2");
        assert!(eq.as_name().is_none());
    }

    #[test]
    fn test_empty_function_name_is_value_list() {
        let list = build_field_item_function(
            "",
            vec![build_field(name("1"), None, vec![]), build_field(name("2"), None, vec![])],
        );
        assert_eq!(list.to_string(), "(1, 2)");
    }
}
