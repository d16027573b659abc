use crate::{
    builder::{Open, QueryBuilder, RawQuery, Restricted},
    error::Result,
    renderer::FilterFunction,
};

/// Methods available once a condition is complete.
impl<'q> QueryBuilder<'q, Restricted> {
    /// Joins the next condition with ` && `.
    pub fn and(self) -> QueryBuilder<'q, Open> {
        self.query.push(" && ");
        self.into_state()
    }

    /// Joins the next condition with ` || `.
    pub fn or(self) -> QueryBuilder<'q, Open> {
        self.query.push(" || ");
        self.into_state()
    }

    /// Closes the innermost group opened with [`QueryBuilder::open`].
    ///
    /// Closing with no open group still emits `)` but makes every later
    /// build fail with [`QueryError::UnmatchedClose`](crate::error::QueryError::UnmatchedClose).
    pub fn close(self) -> QueryBuilder<'q, Restricted> {
        self.query.close_group();
        self
    }

    pub fn build(&self) -> Result<RawQuery> {
        self.query.build()
    }

    pub fn build_with<F: FilterFunction + ?Sized>(&self, filter: &F) -> Result<String> {
        self.query.build_with(filter)
    }
}
