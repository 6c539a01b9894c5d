//! Conditions and WHERE trees.

use super::field::Field;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `is`
    Is,
    /// `not` (as in `x not NULL`)
    Not,
    /// `in`
    In,
    /// `not in`
    NotIn,
    /// `like`
    Like,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Geq,
    /// `<=`
    Leq,
    /// `!=`
    Diff,
    /// `~`
    Regexp,
    /// `~*`
    RegexpCi,
    /// `!~`
    NotRegexp,
    /// `!~*`
    NotRegexpCi,
    /// `similar to`
    Similar,
}

impl CompareOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Is => "is",
            Self::Not => "not",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Geq => ">=",
            Self::Leq => "<=",
            Self::Diff => "!=",
            Self::Regexp => "~",
            Self::RegexpCi => "~*",
            Self::NotRegexp => "!~",
            Self::NotRegexpCi => "!~*",
            Self::Similar => "similar to",
        }
    }

    /// Whether a negated condition with this operator renders an inline
    /// `not` before its right operand.
    #[must_use]
    pub const fn supports_negation(&self) -> bool {
        matches!(self, Self::Is)
    }
}

/// The operator of a [`Condition`], `between` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    /// A two-operand comparison.
    Compare(CompareOp),
    /// `between … and …`
    Between,
}

impl ConditionOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compare(op) => op.as_str(),
            Self::Between => "between",
        }
    }
}

/// A single predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `left op right`
    Compare {
        /// Left operand.
        left: Field,
        /// Operator.
        op: CompareOp,
        /// Right operand.
        right: Field,
        /// Renders `not` before the right operand where the operator allows it.
        negated: bool,
    },
    /// `field between lower and upper`
    Between {
        /// Tested value.
        field: Field,
        /// Lower bound.
        lower: Field,
        /// Upper bound.
        upper: Field,
        /// Negation flag; `between` has no inline negated form.
        negated: bool,
    },
}

impl Condition {
    /// Returns the operator of this condition.
    #[must_use]
    pub const fn op(&self) -> ConditionOp {
        match self {
            Self::Compare { op, .. } => ConditionOp::Compare(*op),
            Self::Between { .. } => ConditionOp::Between,
        }
    }

    /// Returns whether the negation flag is set.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        match self {
            Self::Compare { negated, .. } | Self::Between { negated, .. } => *negated,
        }
    }

    /// Sets the negation flag. `is` renders it as `is not`; every other
    /// condition renders with a leading `not`.
    #[must_use]
    pub fn negated(mut self) -> Self {
        match &mut self {
            Self::Compare { negated, .. } | Self::Between { negated, .. } => *negated = true,
        }
        self
    }

    /// Returns the pair of operands a join analysis looks at: `left`/`right`
    /// for comparisons, `field`/`upper` for `between`.
    #[must_use]
    pub const fn join_operands(&self) -> (&Field, &Field) {
        match self {
            Self::Compare { left, right, .. } => (left, right),
            Self::Between { field, upper, .. } => (field, upper),
        }
    }
}

/// Logical connective of a [`Where::Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    /// `and`
    And,
    /// `or`
    Or,
}

impl LogicOp {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// A boolean tree of conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Where {
    /// A leaf predicate.
    Single(Condition),
    /// `not <where>`
    Negated(Box<Where>),
    /// `<left> and|or <right>`
    Pair {
        /// Left operand.
        left: Box<Where>,
        /// Right operand.
        right: Box<Where>,
        /// Connective.
        logic: LogicOp,
    },
}

impl Where {
    /// Returns every `Single` leaf, left to right, descending through
    /// `Negated` nodes.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        let mut leaves = vec![];
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Single(_) => leaves.push(node),
                Self::Negated(inner) => pending.push(inner),
                Self::Pair { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        leaves
    }

    /// Returns the condition if this node is a leaf.
    #[must_use]
    pub const fn as_single(&self) -> Option<&Condition> {
        match self {
            Self::Single(cond) => Some(cond),
            _ => None,
        }
    }

    /// Moves the tree out of `slot`, leaving an allocation-free stand-in.
    pub(crate) fn take(slot: &mut Self) -> Self {
        core::mem::replace(slot, Self::vacant())
    }

    const fn vacant() -> Self {
        Self::Single(Condition::Compare {
            left: Field::vacant(),
            op: CompareOp::Eq,
            right: Field::vacant(),
            negated: false,
        })
    }
}
