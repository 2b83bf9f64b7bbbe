//! Query descriptors for the data-access collaborator
//!
//! The engine never fetches records itself. It emits a declarative filter
//! tree that is serialised unchanged into the request, e.g.
//!
//! ```json
//! {"and": [
//!   {"date": {"date": {"year": 2024, "month": 3, "day": 1}, "comparison": ">="}},
//!   {"date": {"date": {"year": 2024, "month": 4, "day": 1}, "comparison": "<"}}
//! ]}
//! ```
//!
//! Date ranges are always half-open: `start <= date < end`.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::BudgetResult;
use crate::models::date::day_after;
use crate::models::period::arithmetic;
use crate::models::{CalendarDate, Category, PeriodFn, PeriodStrategy};

/// Comparison operator applied to a record's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A boolean filter tree over record dates and field values
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every child must hold
    And(Vec<Filter>),
    /// Compare the record date against a fixed date
    Date {
        date: CalendarDate,
        comparison: Comparison,
    },
    /// Field equality, serialised as `{<field>: <value>}`
    Field { field: String, value: Value },
}

impl Filter {
    /// Conjunction of `filters`; nested conjunctions are flattened
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        let mut clauses = Vec::new();
        for filter in filters {
            match filter {
                Filter::And(inner) => clauses.extend(inner),
                other => clauses.push(other),
            }
        }
        Filter::And(clauses)
    }

    pub fn date(date: NaiveDate, comparison: Comparison) -> Self {
        Filter::Date {
            date: date.into(),
            comparison,
        }
    }

    pub fn field_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Field {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Render as the JSON value handed to the collaborator
    pub fn to_json(&self) -> BudgetResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(serde::Serialize)]
struct DateClause<'a> {
    date: &'a CalendarDate,
    comparison: Comparison,
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Filter::And(clauses) => map.serialize_entry("and", clauses)?,
            Filter::Date { date, comparison } => map.serialize_entry(
                "date",
                &DateClause {
                    date,
                    comparison: *comparison,
                },
            )?,
            Filter::Field { field, value } => map.serialize_entry(field, value)?,
        }
        map.end()
    }
}

const PERIOD_RANGE: PeriodFn<NaiveDate, BudgetResult<Filter>> =
    PeriodFn::new(month_range, year_range);

fn month_range(anchor: NaiveDate) -> BudgetResult<Filter> {
    let start = arithmetic::month_start(anchor)?;
    let end = day_after(arithmetic::month_end(anchor)?)?;
    Ok(QueryBuilder::date_range(start, end))
}

fn year_range(anchor: NaiveDate) -> BudgetResult<Filter> {
    let start = arithmetic::year_start(anchor)?;
    let end = day_after(arithmetic::year_end(anchor)?)?;
    Ok(QueryBuilder::date_range(start, end))
}

/// Builds filter descriptors for one period kind
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    strategy: PeriodStrategy,
}

impl QueryBuilder {
    pub fn new(strategy: PeriodStrategy) -> Self {
        Self { strategy }
    }

    /// Records dated inside the period containing `anchor`
    pub fn for_period(&self, anchor: NaiveDate) -> BudgetResult<Filter> {
        let filter = self.strategy.apply(&PERIOD_RANGE, anchor)?;
        tracing::debug!(kind = %self.strategy.kind(), %anchor, "built period query");
        Ok(filter)
    }

    /// Records of one category inside the period containing `anchor`
    pub fn for_category_in_period(
        &self,
        category: &Category,
        anchor: NaiveDate,
    ) -> BudgetResult<Filter> {
        Ok(Filter::and([
            self.for_period(anchor)?,
            Self::field_equals("category", category.name()),
        ]))
    }

    /// `start <= date < end_exclusive`
    pub fn date_range(start: NaiveDate, end_exclusive: NaiveDate) -> Filter {
        Filter::And(vec![
            Filter::date(start, Comparison::Gte),
            Filter::date(end_exclusive, Comparison::Lt),
        ])
    }

    pub fn field_equals(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::field_equals(field, value)
    }
}
