use crate::{
    builder::{Open, QueryBuilder, Restricted},
    operator::Operator,
};
use model::core::value::Value;

macro_rules! comparisons {
    ($($(#[$meta:meta])* $method:ident => $op:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $method<P, V>(self, path: P, value: V) -> QueryBuilder<'q, Restricted>
            where
                P: AsRef<str>,
                V: Into<Value>,
            {
                self.compare(path, Operator::$op, value)
            }
        )*
    };
}

/// Methods that start a condition.
impl<'q> QueryBuilder<'q, Open> {
    comparisons! {
        /// `name='Alice'`
        equal => Equal;
        /// `age!=30`
        not_equal => NotEqual;
        /// `age>21`
        greater_than => GreaterThan;
        /// `age>=18`
        greater_than_or_equal => GreaterThanOrEqual;
        /// `age<50`
        less_than => LessThan;
        /// `age<=65`
        less_than_or_equal => LessThanOrEqual;
        /// Wildcard match: `name~'Joh'`
        like => Like;
        /// `name!~'Doe'`
        not_like => NotLike;
        /// At least one element equals: `tags?='admin'`
        any_equal => AnyEqual;
        /// `tags?!='user'`
        any_not_equal => AnyNotEqual;
        /// `numbers?>21`
        any_greater_than => AnyGreaterThan;
        /// `numbers?>=18`
        any_greater_than_or_equal => AnyGreaterThanOrEqual;
        /// `numbers?<50`
        any_less_than => AnyLessThan;
        /// `numbers?<=65`
        any_less_than_or_equal => AnyLessThanOrEqual;
        /// `tags?~'sports'`
        any_like => AnyLike;
        /// `tags?!~'sports'`
        any_not_like => AnyNotLike;
    }

    /// Appends `path<op>{:pathN}` and binds `value` to `pathN`. Every other
    /// comparison reduces to this.
    pub fn compare<P, V>(self, path: P, op: Operator, value: V) -> QueryBuilder<'q, Restricted>
    where
        P: AsRef<str>,
        V: Into<Value>,
    {
        self.query.expression(path.as_ref(), op, value.into());
        self.into_state()
    }

    /// Matches `value` against any of `paths`:
    /// `(title~{:title1} || content~{:content1})`.
    ///
    /// Empty paths are skipped. Each remaining path gets its own parameter
    /// holding a copy of `value`.
    pub fn search<I, P, V>(self, paths: I, value: V) -> QueryBuilder<'q, Restricted>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
        V: Into<Value>,
    {
        let value = value.into();
        let paths = paths
            .into_iter()
            .filter(|path| !AsRef::<str>::as_ref(path).is_empty());

        self.query.push("(");
        for (i, path) in paths.enumerate() {
            if i > 0 {
                self.query.push(" || ");
            }
            self.query.expression(path.as_ref(), Operator::Like, value.clone());
        }
        self.query.push(")");
        self.into_state()
    }

    /// `(age=18 || age=21 || age=30)`. An empty list renders as `()`.
    pub fn is_in<P, I, V>(self, path: P, values: I) -> QueryBuilder<'q, Restricted>
    where
        P: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.chain(path.as_ref(), Operator::Equal, " || ", values)
    }

    /// `(age!=18 && age!=21 && age!=30)`. An empty list renders as `()`.
    pub fn is_not_in<P, I, V>(self, path: P, values: I) -> QueryBuilder<'q, Restricted>
    where
        P: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.chain(path.as_ref(), Operator::NotEqual, " && ", values)
    }

    /// `(age>=18 && age<=30)`
    pub fn between<P, A, B>(self, path: P, from: A, to: B) -> QueryBuilder<'q, Restricted>
    where
        P: AsRef<str>,
        A: Into<Value>,
        B: Into<Value>,
    {
        self.range(
            path.as_ref(),
            (Operator::GreaterThanOrEqual, from.into()),
            " && ",
            (Operator::LessThanOrEqual, to.into()),
        )
    }

    /// `(age<18 || age>30)`
    pub fn not_between<P, A, B>(self, path: P, from: A, to: B) -> QueryBuilder<'q, Restricted>
    where
        P: AsRef<str>,
        A: Into<Value>,
        B: Into<Value>,
    {
        self.range(
            path.as_ref(),
            (Operator::LessThan, from.into()),
            " || ",
            (Operator::GreaterThan, to.into()),
        )
    }

    /// `name=''`, no parameter is bound.
    pub fn is_null<P: AsRef<str>>(self, path: P) -> QueryBuilder<'q, Restricted> {
        self.query.push(&format!("{}=''", path.as_ref()));
        self.into_state()
    }

    /// `name!=''`, no parameter is bound.
    pub fn is_not_null<P: AsRef<str>>(self, path: P) -> QueryBuilder<'q, Restricted> {
        self.query.push(&format!("{}!=''", path.as_ref()));
        self.into_state()
    }

    /// Inserts `raw` verbatim.
    pub fn custom<S: AsRef<str>>(self, raw: S) -> QueryBuilder<'q, Restricted> {
        self.query.push(raw.as_ref());
        self.into_state()
    }

    /// Opens a group that must be closed with [`QueryBuilder::close`]
    /// before the query is built.
    pub fn open(self) -> QueryBuilder<'q, Open> {
        self.query.open_group();
        self
    }

    /// Wraps whatever `callback` builds in parentheses.
    ///
    /// The callback works on the same query, so parameter numbering carries
    /// on across the group boundary.
    pub fn group<F>(self, callback: F) -> QueryBuilder<'q, Restricted>
    where
        F: for<'g> FnOnce(QueryBuilder<'g, Open>) -> QueryBuilder<'g, Restricted>,
    {
        self.query.open_group();
        callback(QueryBuilder::new(&mut *self.query));
        self.query.close_group();
        self.into_state()
    }

    fn chain<I, V>(
        self,
        path: &str,
        op: Operator,
        glue: &str,
        values: I,
    ) -> QueryBuilder<'q, Restricted>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.query.push("(");
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.query.push(glue);
            }
            self.query.expression(path, op, value.into());
        }
        self.query.push(")");
        self.into_state()
    }

    fn range(
        self,
        path: &str,
        (low_op, low): (Operator, Value),
        glue: &str,
        (high_op, high): (Operator, Value),
    ) -> QueryBuilder<'q, Restricted> {
        self.query.push("(");
        self.query.expression(path, low_op, low);
        self.query.push(glue);
        self.query.expression(path, high_op, high);
        self.query.push(")");
        self.into_state()
    }
}
