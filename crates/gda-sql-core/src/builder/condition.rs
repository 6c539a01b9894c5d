use crate::ast::{CompareOp, Condition, Field, LogicOp, Where};

/// Builds `left op right`, not negated.
#[must_use]
pub const fn build_condition(left: Field, op: CompareOp, right: Field) -> Condition {
    Condition::Compare {
        left,
        op,
        right,
        negated: false,
    }
}

/// Builds `field between lower and upper`.
#[must_use]
pub const fn build_condition_between(field: Field, lower: Field, upper: Field) -> Condition {
    Condition::Between {
        field,
        lower,
        upper,
        negated: false,
    }
}

/// Builds a leaf WHERE node.
#[must_use]
pub const fn build_where_single(cond: Condition) -> Where {
    Where::Single(cond)
}

/// Builds `not inner`.
#[must_use]
pub fn build_where_negated(inner: Where) -> Where {
    Where::Negated(Box::new(inner))
}

/// Builds `left logic right`.
#[must_use]
pub fn build_where_pair(left: Where, right: Where, logic: LogicOp) -> Where {
    Where::Pair {
        left: Box::new(left),
        right: Box::new(right),
        logic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FieldItem;
    use crate::builder::build_field;

    fn column(s: &str) -> Field {
        build_field(FieldItem::Name(vec![String::from(s)]), None, vec![])
    }

    #[test]
    fn test_is_not_null() {
        let cond = build_condition(column("a"), CompareOp::Is, column("NULL")).negated();
        assert!(cond.is_negated());
        assert_eq!(build_where_single(cond).to_string(), "(a is not NULL)");
    }

    #[test]
    fn test_between() {
        let cond = build_condition_between(column("a"), column("1"), column("10"));
        assert_eq!(cond.to_string(), "a between 1 and 10");
    }

    #[test]
    fn test_nested_where() {
        let tree = build_where_pair(
            build_where_negated(build_where_single(build_condition(
                column("a"),
                CompareOp::Like,
                column("'x%'"),
            ))),
            build_where_single(build_condition(column("b"), CompareOp::Gt, column("2"))),
            LogicOp::And,
        );
        assert_eq!(tree.to_string(), "((not (a like 'x%')) and (b > 2))");
    }
}
