//! Free-text search and structured filters over the employee directory.
//!
//! Text matching is a case-insensitive substring test against first name,
//! last name, email and department name. An empty query matches everyone.
//! Every filter bound is inclusive and an unset bound constrains nothing.

use serde::{Deserialize, Serialize};
use shared::domain::{Department, Employee, Performance};
use tracing::debug;

use crate::store::EmployeeStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub department: Option<Department>,
    pub min_performance: Option<u8>,
    pub max_performance: Option<u8>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl SearchFilters {
    pub fn only_department(department: Department) -> Self {
        Self {
            department: Some(department),
            ..Self::default()
        }
    }

    pub fn only_performance(performance: Performance) -> Self {
        Self {
            min_performance: Some(performance.get()),
            max_performance: Some(performance.get()),
            ..Self::default()
        }
    }

    /// Overlays the fields set in `update` on top of `self`.
    pub fn merge(self, update: SearchFilters) -> Self {
        Self {
            department: update.department.or(self.department),
            min_performance: update.min_performance.or(self.min_performance),
            max_performance: update.max_performance.or(self.max_performance),
            min_age: update.min_age.or(self.min_age),
            max_age: update.max_age.or(self.max_age),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn accepts(&self, employee: &Employee) -> bool {
        let rating = employee.performance.get();
        self.department
            .map_or(true, |department| employee.department == department)
            && self.min_performance.map_or(true, |min| rating >= min)
            && self.max_performance.map_or(true, |max| rating <= max)
            && self.min_age.map_or(true, |min| employee.age >= min)
            && self.max_age.map_or(true, |max| employee.age <= max)
    }
}

pub fn matches_query(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
        employee.department.as_str(),
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn matches(employee: &Employee, query: &str, filters: Option<&SearchFilters>) -> bool {
    matches_query(employee, query) && filters.map_or(true, |filters| filters.accepts(employee))
}

pub fn filter_employees(
    employees: &[Employee],
    query: &str,
    filters: Option<&SearchFilters>,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| matches(employee, query, filters))
        .cloned()
        .collect()
}

/// Current query and filters of a search panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub filters: SearchFilters,
}

impl SearchState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_filter(&mut self, update: SearchFilters) {
        self.filters = self.filters.merge(update);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn results(&self, employees: &[Employee]) -> Vec<Employee> {
        filter_employees(employees, &self.query, Some(&self.filters))
    }

    /// Derives the view from the store's full list and writes it back.
    pub fn apply(&self, store: &mut EmployeeStore) {
        let results = self.results(store.employees());
        debug!(
            query = %self.query,
            matched = results.len(),
            total = store.employees().len(),
            "search applied"
        );
        store.set_filtered_employees(results);
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
