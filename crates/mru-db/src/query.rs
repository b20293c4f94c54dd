//! Fluent request description for the data API.
//!
//! A [`Query`] names a relation (or RPC), an action, filter parameters, and an
//! optional JSON body. It performs no I/O; [`crate::MarketClient::fetch`]
//! turns it into one HTTP request. Filters follow the data API grammar:
//! `column=op.value`, with `or=(...)` for boolean trees.

use std::fmt::{self, Display};

use mru_core::enums::Table;
use mru_core::{MarketError, MarketResult};
use serde::Serialize;
use serde_json::Value;

/// Action a query performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select,
    Insert,
    Update,
    Delete,
    Rpc,
}

impl Action {
    #[must_use]
    pub const fn method(self) -> reqwest::Method {
        match self {
            Self::Select => reqwest::Method::GET,
            Self::Insert | Self::Rpc => reqwest::Method::POST,
            Self::Update => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Insert | Self::Update | Self::Delete)
    }
}

/// Sort direction for `order=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Table(Table),
    Rpc(String),
}

/// A single data API request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    target: Target,
    action: Action,
    params: Vec<(String, String)>,
    order: Vec<String>,
    body: Option<Value>,
    single: bool,
}

impl Query {
    fn new(target: Target, action: Action, body: Option<Value>) -> Self {
        Self {
            target,
            action,
            params: Vec::new(),
            order: Vec::new(),
            body,
            single: false,
        }
    }

    /// `GET` rows of `table`, projecting `columns`.
    #[must_use]
    pub fn select(table: Table, columns: &str) -> Self {
        Self::new(Target::Table(table), Action::Select, None).columns(columns)
    }

    /// Insert one row (or an array of rows) serialized from `body`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Decode` if `body` cannot be represented as JSON.
    pub fn insert<B: Serialize + ?Sized>(table: Table, body: &B) -> MarketResult<Self> {
        Ok(Self::new(Target::Table(table), Action::Insert, Some(to_json(body)?)))
    }

    /// Update matching rows with the columns present in `body`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Decode` if `body` cannot be represented as JSON.
    pub fn update<B: Serialize + ?Sized>(table: Table, body: &B) -> MarketResult<Self> {
        Ok(Self::new(Target::Table(table), Action::Update, Some(to_json(body)?)))
    }

    /// Delete matching rows.
    #[must_use]
    pub fn delete(table: Table) -> Self {
        Self::new(Target::Table(table), Action::Delete, None)
    }

    /// Call a stored procedure with named arguments.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Decode` if `args` cannot be represented as JSON.
    pub fn rpc<B: Serialize + ?Sized>(function: &str, args: &B) -> MarketResult<Self> {
        Ok(Self::new(
            Target::Rpc(function.to_string()),
            Action::Rpc,
            Some(to_json(args)?),
        ))
    }

    /// Columns returned by the query. For writes this also asks the backend
    /// to return the affected rows.
    #[must_use]
    pub fn columns(mut self, columns: &str) -> Self {
        self.params.retain(|(key, _)| key != "select");
        self.params.push(("select".into(), columns.into()));
        self
    }

    fn filter(mut self, column: &str, op: &str, value: impl Display) -> Self {
        self.params.push((column.into(), format!("{op}.{value}")));
        self
    }

    #[must_use]
    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "eq", value)
    }

    #[must_use]
    pub fn neq(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "neq", value)
    }

    #[must_use]
    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "gte", value)
    }

    #[must_use]
    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.filter(column, "lte", value)
    }

    /// `column IS NULL` / `IS TRUE` etc.
    #[must_use]
    pub fn is(self, column: &str, value: &str) -> Self {
        self.filter(column, "is", value)
    }

    /// Case-insensitive `LIKE`. `pattern` is sent quoted and must already
    /// carry its own wildcards.
    #[must_use]
    pub fn ilike(self, column: &str, pattern: &str) -> Self {
        self.filter(column, "ilike", quote(pattern))
    }

    /// `column IN (values)`. Each value is quoted.
    #[must_use]
    pub fn in_<V: Display>(self, column: &str, values: &[V]) -> Self {
        self.filter(column, "in", list(values))
    }

    /// Boolean OR over filter expressions built with [`expr`] and [`and`].
    #[must_use]
    pub fn or(mut self, expressions: &[String]) -> Self {
        self.params
            .push(("or".into(), format!("({})", expressions.join(","))));
        self
    }

    /// Boolean AND over filter expressions; used to combine several
    /// [`or_group`]s, which a repeated `or` parameter cannot express.
    #[must_use]
    pub fn and(mut self, expressions: &[String]) -> Self {
        self.params
            .push(("and".into(), format!("({})", expressions.join(","))));
        self
    }

    /// Append an ordering term. Multiple calls sort by each term in turn.
    #[must_use]
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order.push(format!("{column}.{}", order.as_str()));
        self
    }

    #[must_use]
    pub fn limit(mut self, count: u32) -> Self {
        self.params.retain(|(key, _)| key != "limit");
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    /// Expect exactly one row; zero rows becomes a not-found error.
    #[must_use]
    pub const fn single(mut self) -> Self {
        self.single = true;
        self
    }

    // -- accessors -------------------------------------------------------

    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.single
    }

    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Path below `/rest/v1/`.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.target {
            Target::Table(table) => table.as_str().to_string(),
            Target::Rpc(function) => format!("rpc/{function}"),
        }
    }

    /// Entity label used when a single-row lookup finds nothing.
    #[must_use]
    pub fn entity(&self) -> &str {
        match &self.target {
            Target::Table(table) => table.entity(),
            Target::Rpc(function) => function,
        }
    }

    /// Query-string parameters in the order they will be sent.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = self.params.clone();
        if !self.order.is_empty() {
            params.push(("order".into(), self.order.join(",")));
        }
        params
    }

    /// Value of the first parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.action.method(), self.path())?;
        for (i, (key, value)) in self.params().iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> MarketResult<Value> {
    serde_json::to_value(body).map_err(|e| MarketError::Decode(e.to_string()))
}

/// Double-quote a filter value so reserved characters (`,` `.` `:` `(` `)`)
/// are taken literally. Backslashes and quotes are escaped.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn list<V: Display>(values: &[V]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(&v.to_string())).collect();
    format!("({})", items.join(","))
}

/// `column.op.value` term for use inside [`Query::or`] and [`and`].
#[must_use]
pub fn expr(column: &str, op: &str, value: impl Display) -> String {
    format!("{column}.{op}.{}", quote(&value.to_string()))
}

/// `and(...)` group for use inside [`Query::or`].
#[must_use]
pub fn and(expressions: &[String]) -> String {
    format!("and({})", expressions.join(","))
}

/// `or(...)` group for use inside [`Query::and`].
#[must_use]
pub fn or_group(expressions: &[String]) -> String {
    format!("or({})", expressions.join(","))
}

/// Filter matching a row keyed by an unordered pair of users, in either
/// column order.
#[must_use]
pub fn either_order(first_column: &str, second_column: &str, a: &str, b: &str) -> Vec<String> {
    vec![
        and(&[expr(first_column, "eq", a), expr(second_column, "eq", b)]),
        and(&[expr(first_column, "eq", b), expr(second_column, "eq", a)]),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Action::Select, reqwest::Method::GET, false)]
    #[case(Action::Insert, reqwest::Method::POST, true)]
    #[case(Action::Update, reqwest::Method::PATCH, true)]
    #[case(Action::Delete, reqwest::Method::DELETE, true)]
    #[case(Action::Rpc, reqwest::Method::POST, false)]
    fn action_maps_to_method(
        #[case] action: Action,
        #[case] method: reqwest::Method,
        #[case] write: bool,
    ) {
        assert_eq!(action.method(), method);
        assert_eq!(action.is_write(), write);
    }

    #[test]
    fn select_renders_filters_then_order() {
        let query = Query::select(Table::Messages, "*")
            .eq("chat_id", 4)
            .eq("visible", true)
            .order("created_at", Order::Asc);
        assert_eq!(
            query.params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("chat_id".to_string(), "eq.4".to_string()),
                ("visible".to_string(), "eq.true".to_string()),
                ("order".to_string(), "created_at.asc".to_string()),
            ]
        );
        assert_eq!(query.path(), "Messages");
        assert_eq!(query.action(), Action::Select);
    }

    #[test]
    fn in_list_quotes_each_value() {
        let query = Query::delete(Table::ProductInformation).in_("id", &[1, 2, 3]);
        assert_eq!(query.param("id").as_deref(), Some(r#"in.("1","2","3")"#));
    }

    #[test]
    fn quote_escapes_backslash_and_quote() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn either_order_covers_both_orderings() {
        let query = Query::select(Table::Chats, "*").or(&either_order(
            "user_id_1",
            "user_id_2",
            "alice",
            "bob",
        ));
        assert_eq!(
            query.param("or").as_deref(),
            Some(
                r#"(and(user_id_1.eq."alice",user_id_2.eq."bob"),and(user_id_1.eq."bob",user_id_2.eq."alice"))"#
            )
        );
    }

    #[test]
    fn columns_replaces_previous_projection() {
        let query = Query::select(Table::Reviews, "*").columns("rating:rating.avg()");
        assert_eq!(query.param("select").as_deref(), Some("rating:rating.avg()"));
        assert_eq!(
            query.params().iter().filter(|(k, _)| k == "select").count(),
            1
        );
    }

    #[test]
    fn rpc_targets_function_path() {
        let query = Query::rpc("mark_product_as_sold", &serde_json::json!({"product_id_param": 9}))
            .expect("json body");
        assert_eq!(query.path(), "rpc/mark_product_as_sold");
        assert_eq!(query.action().method(), reqwest::Method::POST);
        assert_eq!(query.body(), Some(&serde_json::json!({"product_id_param": 9})));
    }

    #[test]
    fn display_is_readable_for_logs() {
        let query = Query::select(Table::CategoryTags, "*").order("name", Order::Asc);
        assert_eq!(query.to_string(), "GET /Category_Tags?select=*&order=name.asc");
    }
}
