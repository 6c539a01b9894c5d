//! SQL Parser implementation.

use super::error::ParseError;
use super::pratt::{
    NOT_BINDING_POWER, field_binding_power, logic_binding_power, token_to_compare_op,
    token_to_field_op, token_to_logic_op,
};
use crate::ast::{
    CompareOp, Condition, DeleteStatement, Field, FieldItem, InsertStatement, JoinType,
    OrderDirection, OrderField, ParamSpec, ParamSpecKind, SelectStatement, Statement,
    StatementBody, Table, UpdateStatement, Where,
};
use crate::builder::{
    build_condition, build_condition_between, build_delete_statement, build_field,
    build_field_item_equation, build_field_item_function, build_field_item_inline_select,
    build_field_item_name, build_insert_statement, build_order_field, build_param_spec,
    build_select_statement, build_statement, build_table_function, build_table_join,
    build_table_nested_select, build_table_simple, build_update_statement, build_where_negated,
    build_where_pair, build_where_single,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// A saved parser position, restored when a speculative parse fails.
struct Checkpoint<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

/// SQL Parser.
///
/// Every node is created through [`crate::builder`]; the parser itself
/// only decides which constructor to call.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses a single SQL statement, followed by an optional `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement or
    /// if anything other than `;` follows it.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let body = match self.current.as_keyword() {
            Some(Keyword::Select) => StatementBody::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => StatementBody::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => StatementBody::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => StatementBody::Delete(self.parse_delete_statement()?),
            _ => return Err(self.unexpected("SELECT, INSERT, UPDATE, or DELETE")),
        };

        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
        if !self.current.is_eof() {
            return Err(self.unexpected("end of statement"));
        }

        Ok(build_statement(body))
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        // DISTINCT or ALL
        let distinct = if self.eat_keyword(Keyword::Distinct) {
            true
        } else {
            self.eat_keyword(Keyword::All);
            false
        };

        let fields = self.parse_select_fields()?;

        let from = if self.eat_keyword(Keyword::From) {
            self.parse_from_list()?
        } else {
            vec![]
        };

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_where(0)?)
        } else {
            None
        };

        // ORDER BY and GROUP BY, in either order
        let mut order = None;
        let mut group = None;
        loop {
            if order.is_none() && self.check_keyword(Keyword::Order) {
                self.advance();
                self.expect_keyword(Keyword::By)?;
                order = Some(self.parse_order_list()?);
            } else if group.is_none() && self.check_keyword(Keyword::Group) {
                self.advance();
                self.expect_keyword(Keyword::By)?;
                group = Some(self.parse_operand_list()?);
            } else {
                break;
            }
        }

        Ok(build_select_statement(
            distinct,
            fields,
            from,
            where_clause,
            order.unwrap_or_default(),
            group.unwrap_or_default(),
        ))
    }

    /// Parses the select list: fields with optional param specs and alias.
    fn parse_select_fields(&mut self) -> Result<Vec<Field>, ParseError> {
        let mut fields = vec![];
        loop {
            let (item, param_spec) = self.parse_field_parts()?;
            let alias = self.parse_optional_alias()?;
            fields.push(build_field(item, alias, param_spec));

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(fields)
    }

    /// Parses a FROM list: comma separated tables and `… JOIN table [ON …]`
    /// entries.
    fn parse_from_list(&mut self) -> Result<Vec<Table>, ParseError> {
        let mut tables = vec![self.parse_table()?];
        loop {
            if self.check(&TokenKind::Comma) {
                self.advance();
                tables.push(self.parse_table()?);
            } else if self.is_join_keyword() {
                let join_type = self.parse_join_type()?;
                let table = self.parse_table()?;
                let on = if join_type != JoinType::Cross && self.eat_keyword(Keyword::On) {
                    Some(self.parse_where(0)?)
                } else {
                    None
                };
                tables.push(table.joined(join_type, on));
            } else {
                break;
            }
        }
        Ok(tables)
    }

    /// Parses one table: a name, a function call, `(select …)` or a
    /// parenthesised `(left JOIN right ON cond)`, then an optional alias.
    fn parse_table(&mut self) -> Result<Table, ParseError> {
        let mut table = if self.check(&TokenKind::LeftParen) {
            self.advance();
            let table = if self.check_keyword(Keyword::Select) {
                build_table_nested_select(self.parse_select_statement()?)
            } else {
                let left = self.parse_table()?;
                if self.is_join_keyword() {
                    let join_type = self.parse_join_type()?;
                    let mut right = self.parse_table()?;
                    right.join_type = join_type;
                    let cond = if join_type != JoinType::Cross && self.eat_keyword(Keyword::On) {
                        Some(self.parse_join_condition()?)
                    } else {
                        None
                    };
                    build_table_join(left, right, cond)
                } else {
                    left
                }
            };
            self.expect(&TokenKind::RightParen)?;
            table
        } else {
            let name = self.parse_name_path()?.join(".");
            if self.check(&TokenKind::LeftParen) {
                self.advance();
                let args = self.parse_call_args()?;
                build_table_function(name, args)
            } else {
                build_table_simple(name)
            }
        };

        if let Some(alias) = self.parse_optional_alias()? {
            table.alias = Some(alias);
        }
        Ok(table)
    }

    /// Parses the target table of INSERT/UPDATE/DELETE.
    fn parse_target_table(&mut self, allow_alias: bool) -> Result<Table, ParseError> {
        let mut table = build_table_simple(self.parse_name_path()?.join("."));
        if allow_alias {
            table.alias = self.parse_optional_alias()?;
        }
        Ok(table)
    }

    /// The condition of a parenthesised join node must be a single
    /// comparison, optionally negated once.
    fn parse_join_condition(&mut self) -> Result<Condition, ParseError> {
        let span = self.current.span;
        let leading_not = self.eat_keyword(Keyword::Not);
        let (cond, negated) = match self.parse_condition()? {
            Where::Single(cond) => {
                let negated = cond.is_negated();
                (cond, negated)
            }
            Where::Negated(inner) => match *inner {
                Where::Single(cond) if !cond.is_negated() => (cond, true),
                _ => {
                    return Err(ParseError::new(
                        "Join condition must be a single comparison",
                        span,
                    ))
                }
            },
            Where::Pair { .. } => {
                return Err(ParseError::new(
                    "Join condition must be a single comparison",
                    span,
                ))
            }
        };
        match (leading_not, negated) {
            (true, true) => Err(ParseError::new(
                "Join condition can only be negated once",
                span,
            )),
            (false, false) => Ok(cond),
            _ => Ok(cond.negated()),
        }
    }

    /// Checks if current token is a join keyword.
    fn is_join_keyword(&self) -> bool {
        matches!(
            self.current.as_keyword(),
            Some(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Cross
            )
        )
    }

    /// Parses a join type.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let join_type = match self.current.as_keyword() {
            Some(Keyword::Join) => {
                self.advance();
                return Ok(JoinType::Inner);
            }
            Some(Keyword::Inner) => JoinType::Inner,
            Some(Keyword::Cross) => JoinType::Cross,
            Some(Keyword::Left) => JoinType::Left,
            Some(Keyword::Right) => JoinType::Right,
            Some(Keyword::Full) => JoinType::Full,
            _ => return Err(self.unexpected("JOIN keyword")),
        };
        self.advance();
        if matches!(join_type, JoinType::Left | JoinType::Right | JoinType::Full) {
            self.eat_keyword(Keyword::Outer);
        }
        self.expect_keyword(Keyword::Join)?;
        Ok(join_type)
    }

    /// Parses an optional alias (`AS name` or a bare identifier).
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            Ok(Some(self.expect_identifier()?))
        } else if matches!(&self.current.kind, TokenKind::Identifier(_)) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.parse_target_table(false)?;

        // `(fields) [VALUES] (values)`, `[VALUES] (values)`
        let (fields, values) = if self.eat_keyword(Keyword::Values) {
            (vec![], self.parse_parenthesised_operands()?)
        } else {
            let first = self.parse_parenthesised_operands()?;
            if self.eat_keyword(Keyword::Values) || self.check(&TokenKind::LeftParen) {
                (first, self.parse_parenthesised_operands()?)
            } else {
                (vec![], first)
            }
        };

        Ok(build_insert_statement(table, fields, values))
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_target_table(true)?;
        self.expect_keyword(Keyword::Set)?;

        let mut set = vec![];
        loop {
            let column = self.parse_operand()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_operand()?;
            set.push(build_condition(column, CompareOp::Eq, value));

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_where(0)?)
        } else {
            None
        };

        Ok(build_update_statement(table, set, where_clause))
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_target_table(true)?;

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_where(0)?)
        } else {
            None
        };

        Ok(build_delete_statement(table, where_clause))
    }

    /// Parses an ORDER BY list of names or column positions.
    fn parse_order_list(&mut self) -> Result<Vec<OrderField>, ParseError> {
        let mut items = vec![];
        loop {
            let name = if matches!(self.current.kind, TokenKind::Integer(_)) {
                let position = self.current_text().to_string();
                self.advance();
                vec![position]
            } else {
                self.parse_name_path()?
            };
            let direction = if self.eat_keyword(Keyword::Desc) {
                OrderDirection::Desc
            } else {
                self.eat_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            items.push(build_order_field(name, direction));

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    /// Parses a WHERE tree using Pratt parsing over `AND`/`OR`.
    fn parse_where(&mut self, min_bp: u8) -> Result<Where, ParseError> {
        let mut lhs = self.parse_where_prefix()?;

        loop {
            let Some((l_bp, r_bp)) = logic_binding_power(&self.current.kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(logic) = token_to_logic_op(&self.current.kind) else {
                break;
            };
            self.advance();
            let rhs = self.parse_where(r_bp)?;
            lhs = build_where_pair(lhs, rhs, logic);
        }

        Ok(lhs)
    }

    /// Parses `NOT where`, a parenthesised group, or a single condition.
    fn parse_where_prefix(&mut self) -> Result<Where, ParseError> {
        if self.eat_keyword(Keyword::Not) {
            let inner = self.parse_where(NOT_BINDING_POWER)?;
            return Ok(build_where_negated(inner));
        }

        // `(` opens either a WHERE group or a parenthesised operand such as
        // `(a + b) = c`; try the group first.
        if self.check(&TokenKind::LeftParen)
            && self.peek_kind() != TokenKind::Keyword(Keyword::Select)
        {
            let checkpoint = self.checkpoint();
            self.advance();
            let group_error = match self.parse_where(0) {
                Ok(group) if self.check(&TokenKind::RightParen) => {
                    self.advance();
                    if !self.continues_operand() {
                        return Ok(group);
                    }
                    None
                }
                Ok(_) => Some(self.unexpected("RightParen")),
                Err(e) => Some(e),
            };
            self.restore(checkpoint);

            // report whichever reading got further into the input
            return self.parse_condition().map_err(|e| match group_error {
                Some(group) if group.span.start > e.span.start => group,
                _ => e,
            });
        }

        self.parse_condition()
    }

    /// Whether the current token would extend a value into a condition.
    fn continues_operand(&self) -> bool {
        token_to_compare_op(&self.current.kind).is_some()
            || field_binding_power(&self.current.kind).is_some()
            || matches!(
                self.current.as_keyword(),
                Some(
                    Keyword::Is
                        | Keyword::In
                        | Keyword::Like
                        | Keyword::Between
                        | Keyword::Similar
                        | Keyword::Not
                )
            )
    }

    /// Parses one predicate. Negated `LIKE`, `BETWEEN` and `SIMILAR TO`
    /// come back wrapped in `Where::Negated`.
    fn parse_condition(&mut self) -> Result<Where, ParseError> {
        let left = self.parse_operand()?;

        if let Some(op) = token_to_compare_op(&self.current.kind) {
            self.advance();
            let right = self.parse_operand()?;
            return Ok(build_where_single(build_condition(left, op, right)));
        }

        match self.current.as_keyword() {
            Some(Keyword::Is) => {
                self.advance();
                let negated = self.eat_keyword(Keyword::Not);
                let right = self.parse_operand()?;
                let cond = build_condition(left, CompareOp::Is, right);
                Ok(build_where_single(if negated { cond.negated() } else { cond }))
            }
            Some(Keyword::In) => {
                self.advance();
                let right = self.parse_in_list()?;
                Ok(build_where_single(build_condition(left, CompareOp::In, right)))
            }
            Some(Keyword::Like) => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(build_where_single(build_condition(left, CompareOp::Like, right)))
            }
            Some(Keyword::Similar) => {
                self.advance();
                self.expect_keyword(Keyword::To)?;
                let right = self.parse_operand()?;
                Ok(build_where_single(build_condition(
                    left,
                    CompareOp::Similar,
                    right,
                )))
            }
            Some(Keyword::Between) => {
                self.advance();
                self.parse_between(left)
            }
            Some(Keyword::Not) => {
                self.advance();
                self.parse_negated_condition(left)
            }
            _ => Err(self.unexpected("comparison operator")),
        }
    }

    /// Parses what follows `left NOT`.
    fn parse_negated_condition(&mut self, left: Field) -> Result<Where, ParseError> {
        match self.current.as_keyword() {
            Some(Keyword::In) => {
                self.advance();
                let right = self.parse_in_list()?;
                Ok(build_where_single(build_condition(
                    left,
                    CompareOp::NotIn,
                    right,
                )))
            }
            Some(Keyword::Like) => {
                self.advance();
                let right = self.parse_operand()?;
                Ok(build_where_negated(build_where_single(build_condition(
                    left,
                    CompareOp::Like,
                    right,
                ))))
            }
            Some(Keyword::Similar) => {
                self.advance();
                self.expect_keyword(Keyword::To)?;
                let right = self.parse_operand()?;
                Ok(build_where_negated(build_where_single(build_condition(
                    left,
                    CompareOp::Similar,
                    right,
                ))))
            }
            Some(Keyword::Between) => {
                self.advance();
                Ok(build_where_negated(self.parse_between(left)?))
            }
            _ => {
                let right = self.parse_operand()?;
                Ok(build_where_single(build_condition(left, CompareOp::Not, right)))
            }
        }
    }

    /// Parses `lower AND upper` after `field BETWEEN`.
    fn parse_between(&mut self, field: Field) -> Result<Where, ParseError> {
        let lower = self.parse_operand()?;
        self.expect_keyword(Keyword::And)?;
        let upper = self.parse_operand()?;
        Ok(build_where_single(build_condition_between(
            field, lower, upper,
        )))
    }

    /// Parses the right side of `IN`: `(select …)`, `(a, b, …)` or a
    /// single operand.
    fn parse_in_list(&mut self) -> Result<Field, ParseError> {
        if !self.check(&TokenKind::LeftParen) {
            return self.parse_operand();
        }
        self.advance();
        if self.check_keyword(Keyword::Select) {
            let select = self.parse_select_statement()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(build_field(
                build_field_item_inline_select(select),
                None,
                vec![],
            ));
        }
        let args = self.parse_call_args()?;
        Ok(build_field(build_field_item_function("", args), None, vec![]))
    }

    /// Parses a value without alias: item plus param specs.
    fn parse_operand(&mut self) -> Result<Field, ParseError> {
        let (item, param_spec) = self.parse_field_parts()?;
        Ok(build_field(item, None, param_spec))
    }

    /// Parses a comma separated list of operands.
    fn parse_operand_list(&mut self) -> Result<Vec<Field>, ParseError> {
        let mut fields = vec![self.parse_operand()?];
        while self.check(&TokenKind::Comma) {
            self.advance();
            fields.push(self.parse_operand()?);
        }
        Ok(fields)
    }

    /// Parses `( operand, … )`, possibly empty.
    fn parse_parenthesised_operands(&mut self) -> Result<Vec<Field>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        self.parse_call_args()
    }

    /// Parses call arguments after the opening parenthesis, consuming the
    /// closing one.
    fn parse_call_args(&mut self) -> Result<Vec<Field>, ParseError> {
        if self.check(&TokenKind::RightParen) {
            self.advance();
            return Ok(vec![]);
        }
        let args = self.parse_operand_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(args)
    }

    /// Parses a field item and the param specs attached to it.
    ///
    /// A param spec may also stand alone as a value (`a = ##id::int`); its
    /// item is then the placeholder name itself.
    fn parse_field_parts(&mut self) -> Result<(FieldItem, Vec<ParamSpec>), ParseError> {
        if self.check(&TokenKind::HashHash) {
            let specs = self.parse_param_specs()?;
            let placeholder = specs
                .iter()
                .find(|spec| spec.kind == ParamSpecKind::Name)
                .map(|spec| format!("##{}", spec.content))
                .unwrap_or_default();
            return Ok((build_field_item_name(vec![placeholder]), specs));
        }
        let item = self.parse_field_item(0)?;
        let specs = self.parse_param_specs()?;
        Ok((item, specs))
    }

    /// Parses `##name[::type][::null]` and
    /// `[:name="…" :descr="…" :type="…" :isparam="…" :nullok="…"]`
    /// entries, in any number.
    fn parse_param_specs(&mut self) -> Result<Vec<ParamSpec>, ParseError> {
        let mut specs = vec![];
        loop {
            if self.check(&TokenKind::HashHash) {
                self.advance();
                specs.push(build_param_spec(ParamSpecKind::Name, self.expect_word()?));
                while self.check(&TokenKind::DoubleColon) {
                    self.advance();
                    if self.eat_keyword(Keyword::Null) {
                        specs.push(build_param_spec(ParamSpecKind::NullOk, "true"));
                    } else {
                        specs.push(build_param_spec(ParamSpecKind::Type, self.expect_word()?));
                    }
                }
            } else if self.check(&TokenKind::LeftBracket) {
                self.advance();
                while !self.check(&TokenKind::RightBracket) {
                    self.expect(&TokenKind::Colon)?;
                    let span = self.current.span;
                    let key = self.expect_word()?;
                    let kind = ParamSpecKind::from_name(&key).ok_or_else(|| {
                        ParseError::new(format!("Unknown parameter attribute: {key}"), span)
                    })?;
                    self.expect(&TokenKind::Eq)?;
                    specs.push(build_param_spec(kind, self.expect_string()?));
                }
                self.advance();
            } else {
                break;
            }
        }
        Ok(specs)
    }

    /// Parses a field item using Pratt parsing over `+ - * /`.
    fn parse_field_item(&mut self, min_bp: u8) -> Result<FieldItem, ParseError> {
        let mut lhs = self.parse_field_primary()?;

        loop {
            let Some((l_bp, r_bp)) = field_binding_power(&self.current.kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(op) = token_to_field_op(&self.current.kind) else {
                break;
            };
            self.advance();
            let rhs = self.parse_field_item(r_bp)?;
            lhs = build_field_item_equation(lhs, rhs, op);
        }

        Ok(lhs)
    }

    /// Parses a primary field item.
    fn parse_field_primary(&mut self) -> Result<FieldItem, ParseError> {
        match &self.current.kind {
            // Literals keep their source text
            TokenKind::Integer(_)
            | TokenKind::Float(_)
            | TokenKind::String(_)
            | TokenKind::Keyword(Keyword::Null | Keyword::True | Keyword::False) => {
                let text = self.current_text().to_string();
                self.advance();
                Ok(build_field_item_name(vec![text]))
            }
            TokenKind::Minus => {
                self.advance();
                if !matches!(self.current.kind, TokenKind::Integer(_) | TokenKind::Float(_)) {
                    return Err(self.unexpected("number"));
                }
                let text = format!("-{}", self.current_text());
                self.advance();
                Ok(build_field_item_name(vec![text]))
            }
            TokenKind::Star => {
                self.advance();
                Ok(build_field_item_name(vec![String::from("*")]))
            }
            TokenKind::Identifier(_) => {
                let path = self.parse_name_path()?;
                if self.check(&TokenKind::LeftParen) {
                    self.advance();
                    let args = self.parse_call_args()?;
                    return Ok(build_field_item_function(path.join("."), args));
                }
                Ok(build_field_item_name(path))
            }
            TokenKind::LeftParen => {
                self.advance();
                let item = if self.check_keyword(Keyword::Select) {
                    build_field_item_inline_select(self.parse_select_statement()?)
                } else {
                    self.parse_field_item(0)?
                };
                self.expect(&TokenKind::RightParen)?;
                Ok(item)
            }
            _ => Err(self.unexpected("field")),
        }
    }

    /// Parses a dotted name such as `t.col` or `t.*`.
    fn parse_name_path(&mut self) -> Result<Vec<String>, ParseError> {
        let mut path = vec![self.expect_identifier()?];
        while self.check(&TokenKind::Dot) {
            self.advance();
            if self.check(&TokenKind::Star) {
                self.advance();
                path.push(String::from("*"));
                break;
            }
            path.push(self.expect_identifier()?);
        }
        Ok(path)
    }

    // --- Helper methods ---

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Returns the kind of the token after the current one.
    fn peek_kind(&self) -> TokenKind {
        self.lexer.clone().next_token().kind
    }

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            lexer: self.lexer.clone(),
            current: self.current.clone(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.lexer = checkpoint.lexer;
        self.current = checkpoint.current;
    }

    /// Returns the source text of the current token.
    fn current_text(&self) -> &'a str {
        self.current.span.text(self.lexer.input())
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Builds an error for the current token. Lexer errors keep their own
    /// message.
    fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current.kind {
            TokenKind::Error(message) => ParseError::new(message.clone(), self.current.span),
            found => ParseError::unexpected(expected, found.clone(), self.current.span),
        }
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("{kind:?}")))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Expects an identifier or keyword and returns its source text.
    fn expect_word(&mut self) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Identifier(_) | TokenKind::Keyword(_) => {
                let word = self.current_text().to_string();
                self.advance();
                Ok(word)
            }
            _ => Err(self.unexpected("name")),
        }
    }

    /// Expects a quoted value and returns it unescaped. Both `'…'` and
    /// `"…"` are accepted, as param spec attributes are written with
    /// double quotes.
    fn expect_string(&mut self) -> Result<String, ParseError> {
        let value = match &self.current.kind {
            TokenKind::String(value) => value.clone(),
            TokenKind::Identifier(raw) => {
                let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) else {
                    return Err(self.unexpected("string"));
                };
                inner.replace("\"\"", "\"")
            }
            _ => return Err(self.unexpected("string")),
        };
        self.advance();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FieldOp, LogicOp, TableKind};

    fn parse(sql: &str) -> Result<Statement, ParseError> {
        Parser::new(sql).parse_statement()
    }

    fn parse_select(sql: &str) -> SelectStatement {
        match parse(sql).unwrap().body {
            StatementBody::Select(select) => select,
            other => panic!("expected SELECT, got {other:?}"),
        }
    }

    fn where_of(sql: &str) -> Where {
        parse_select(sql).where_clause.unwrap()
    }

    #[test]
    fn test_simple_select() {
        let select = parse_select("SELECT id, name FROM users");
        assert_eq!(select.fields.len(), 2);
        assert_eq!(select.from[0].simple_name(), Some("users"));
        assert!(!select.distinct);
    }

    #[test]
    fn test_literals_keep_source_text() {
        let select = parse_select("SELECT 3.14, 'it''s', NULL, -5 FROM t");
        let names: Vec<_> = select
            .fields
            .iter()
            .map(|f| f.item.as_name().unwrap()[0].clone())
            .collect();
        assert_eq!(names, ["3.14", "'it''s'", "NULL", "-5"]);
    }

    #[test]
    fn test_expression_precedence() {
        let select = parse_select("SELECT a + b * c FROM t");
        match &select.fields[0].item {
            FieldItem::Equation { op, right, .. } => {
                assert_eq!(*op, FieldOp::Plus);
                assert!(matches!(
                    right.as_ref(),
                    FieldItem::Equation {
                        op: FieldOp::Times,
                        ..
                    }
                ));
            }
            other => panic!("expected equation, got {other:?}"),
        }
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let tree = where_of("SELECT * FROM t WHERE a = 1 OR b = 2 AND c = 3");
        match tree {
            Where::Pair { logic, right, .. } => {
                assert_eq!(logic, LogicOp::Or);
                assert!(matches!(
                    *right,
                    Where::Pair {
                        logic: LogicOp::And,
                        ..
                    }
                ));
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn test_parenthesised_group_and_operand() {
        let tree = where_of("SELECT * FROM t WHERE (a = 1 OR b = 2) AND (x + 1) = y");
        match tree {
            Where::Pair { left, right, logic } => {
                assert_eq!(logic, LogicOp::And);
                assert!(matches!(*left, Where::Pair { logic: LogicOp::Or, .. }));
                let cond = right.as_single().unwrap();
                assert!(matches!(
                    cond.join_operands().0.item,
                    FieldItem::Equation { .. }
                ));
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn test_negations() {
        let is_not = where_of("SELECT * FROM t WHERE a IS NOT NULL");
        assert!(is_not.as_single().unwrap().is_negated());

        let not_like = where_of("SELECT * FROM t WHERE a NOT LIKE 'x%'");
        assert!(matches!(not_like, Where::Negated(_)));

        let not_in = where_of("SELECT * FROM t WHERE a NOT IN (1, 2)");
        assert_eq!(
            not_in.as_single().unwrap().op(),
            crate::ast::ConditionOp::Compare(CompareOp::NotIn)
        );

        let bare_not = where_of("SELECT * FROM t WHERE a NOT b");
        assert_eq!(
            bare_not.as_single().unwrap().op(),
            crate::ast::ConditionOp::Compare(CompareOp::Not)
        );
    }

    #[test]
    fn test_between() {
        let tree = where_of("SELECT * FROM t WHERE a BETWEEN 1 AND 10 AND b = 2");
        match tree {
            Where::Pair { left, .. } => {
                assert!(matches!(
                    left.as_single(),
                    Some(Condition::Between { .. })
                ));
            }
            other => panic!("expected pair, got {other:?}"),
        }
    }

    #[test]
    fn test_joins_in_from_list() {
        let select = parse_select(
            "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id, c JOIN d ON c.x = d.x",
        );
        let types: Vec<_> = select.from.iter().map(|t| t.join_type).collect();
        assert_eq!(
            types,
            [JoinType::Cross, JoinType::Left, JoinType::Cross, JoinType::Inner]
        );
        assert!(select.from[1].join_cond.is_some());
    }

    #[test]
    fn test_parenthesised_join_node() {
        let select = parse_select("SELECT * FROM (a JOIN b ON a.id = b.id) AS j");
        let table = &select.from[0];
        assert!(matches!(table.kind, TableKind::Join { cond: Some(_), .. }));
        assert_eq!(table.alias.as_deref(), Some("j"));
    }

    #[test]
    fn test_parenthesised_join_keeps_join_type() {
        for (sql, expected) in [
            ("SELECT * FROM (a LEFT JOIN b ON a.id = b.id)", JoinType::Left),
            ("SELECT * FROM (a RIGHT OUTER JOIN b ON a.id = b.id)", JoinType::Right),
            ("SELECT * FROM (a FULL JOIN b ON a.id = b.id)", JoinType::Full),
            ("SELECT * FROM (a INNER JOIN b ON a.id = b.id)", JoinType::Inner),
            ("SELECT * FROM (a CROSS JOIN b)", JoinType::Cross),
        ] {
            let select = parse_select(sql);
            match &select.from[0].kind {
                TableKind::Join { right, .. } => assert_eq!(right.join_type, expected, "{sql}"),
                other => panic!("expected join node, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parenthesised_cross_join_rejects_on() {
        let err = parse("SELECT * FROM (a CROSS JOIN b ON a.id = b.id)").unwrap_err();
        assert_eq!(err.expected.as_deref(), Some("RightParen"));
    }

    #[test]
    fn test_parenthesised_join_negated_condition() {
        let select = parse_select("SELECT * FROM (a JOIN b ON NOT a.id = b.id)");
        match &select.from[0].kind {
            TableKind::Join { cond: Some(cond), .. } => assert!(cond.is_negated()),
            other => panic!("expected join node, got {other:?}"),
        }
        let select = parse_select("SELECT * FROM (a JOIN b ON a.name NOT LIKE b.name)");
        match &select.from[0].kind {
            TableKind::Join { cond: Some(cond), .. } => {
                assert!(cond.is_negated());
                assert_eq!(cond.op(), crate::ast::ConditionOp::Compare(CompareOp::Like));
            }
            other => panic!("expected join node, got {other:?}"),
        }
        assert!(parse("SELECT * FROM (a JOIN b ON NOT a.name NOT LIKE b.name)").is_err());
    }

    #[test]
    fn test_unclosed_group_reports_missing_paren() {
        let sql = "SELECT a FROM t WHERE (a = 1";
        let err = parse(sql).unwrap_err();
        assert_eq!(err.span.start, sql.len());
        assert_eq!(err.found, Some(TokenKind::Eof));
        assert_eq!(err.expected.as_deref(), Some("RightParen"));
    }

    #[test]
    fn test_operand_error_wins_when_it_gets_further() {
        let sql = "SELECT a FROM t WHERE (a + 1) = ";
        let err = parse(sql).unwrap_err();
        assert_eq!(err.span.start, sql.len());
    }

    #[test]
    fn test_order_and_group_in_either_order() {
        let a = parse_select("SELECT a FROM t ORDER BY a DESC GROUP BY a");
        let b = parse_select("SELECT a FROM t GROUP BY a ORDER BY a DESC");
        assert_eq!(a, b);
        assert_eq!(a.order[0].direction, OrderDirection::Desc);
    }

    #[test]
    fn test_insert_forms() {
        for sql in [
            "INSERT INTO t (a, b) VALUES (1, 2)",
            "INSERT INTO t (a, b) (1, 2)",
        ] {
            match parse(sql).unwrap().body {
                StatementBody::Insert(insert) => {
                    assert_eq!(insert.fields.len(), 2);
                    assert_eq!(insert.values.len(), 2);
                }
                other => panic!("expected INSERT, got {other:?}"),
            }
        }
        match parse("INSERT INTO t VALUES (1)").unwrap().body {
            StatementBody::Insert(insert) => assert!(insert.fields.is_empty()),
            other => panic!("expected INSERT, got {other:?}"),
        }
    }

    #[test]
    fn test_update_and_delete() {
        match parse("UPDATE t SET a = 1, b = 'x' WHERE id = 3").unwrap().body {
            StatementBody::Update(update) => {
                assert_eq!(update.set.len(), 2);
                assert!(update.where_clause.is_some());
            }
            other => panic!("expected UPDATE, got {other:?}"),
        }
        match parse("DELETE FROM t;").unwrap().body {
            StatementBody::Delete(delete) => assert!(delete.where_clause.is_none()),
            other => panic!("expected DELETE, got {other:?}"),
        }
    }

    #[test]
    fn test_param_specs() {
        let select = parse_select(
            "SELECT a [:name=\"p\" :descr=\"first\" :nullok=\"true\"] FROM t WHERE id = ##id::int::null",
        );
        let field = &select.fields[0];
        assert_eq!(field.param(ParamSpecKind::Descr), Some("first"));
        assert_eq!(field.param(ParamSpecKind::NullOk), Some("true"));

        let cond = select.where_clause.as_ref().unwrap().as_single().unwrap();
        let right = cond.join_operands().1;
        assert_eq!(right.param(ParamSpecKind::Name), Some("id"));
        assert_eq!(right.param(ParamSpecKind::Type), Some("int"));
        assert_eq!(right.param(ParamSpecKind::NullOk), Some("true"));
    }

    #[test]
    fn test_errors() {
        assert!(parse("SELECT FROM t").is_err());
        assert!(parse("SELECT a FROM t garbage garbage").is_err());
        assert!(parse("DROP TABLE t").is_err());
        let err = parse("SELECT a FROM t WHERE a = 'open").unwrap_err();
        assert!(err.message.contains("Unterminated"));
        let err = parse("SELECT a [:colour=\"red\"] FROM t").unwrap_err();
        assert!(err.message.contains("colour"));
    }
}
