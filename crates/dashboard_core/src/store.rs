use std::sync::Arc;

use shared::{
    domain::{Department, Employee, EmployeeId},
    protocol::ApiUser,
};
use tracing::{debug, info, warn};

use crate::{
    assign::{assign_attributes, AttributeAssigner},
    error::FetchError,
    source::EmployeeSource,
};

/// In-memory employee directory backing the dashboard.
///
/// The filtered view is a materialized list: it is only rewritten by a fetch,
/// by [`EmployeeStore::set_filtered_employees`], and by promotion of an
/// employee it contains. Promoting someone does not re-run the filter that
/// produced the view, so the view may keep showing an employee whose new
/// rating no longer satisfies that filter until the filter is applied again.
pub struct EmployeeStore {
    source: Arc<dyn EmployeeSource>,
    assigner: Box<dyn AttributeAssigner>,
    employees: Vec<Employee>,
    filtered_employees: Vec<Employee>,
    bookmarks: Vec<EmployeeId>,
    error: Option<String>,
    loading: bool,
}

impl EmployeeStore {
    pub fn new(source: Arc<dyn EmployeeSource>, assigner: Box<dyn AttributeAssigner>) -> Self {
        Self {
            source,
            assigner,
            employees: Vec::new(),
            filtered_employees: Vec::new(),
            bookmarks: Vec::new(),
            error: None,
            loading: false,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filtered_employees(&self) -> &[Employee] {
        &self.filtered_employees
    }

    pub fn bookmarks(&self) -> &[EmployeeId] {
        &self.bookmarks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> Arc<dyn EmployeeSource> {
        Arc::clone(&self.source)
    }

    /// Loads the directory and replaces both lists on success.
    ///
    /// Failures never escape: they end up in [`EmployeeStore::error`] and the
    /// previous lists are kept.
    pub async fn fetch_employees(&mut self) {
        self.begin_fetch();
        let source = self.source();
        let result = source.fetch_users().await;
        self.finish_fetch(result);
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<ApiUser>, FetchError>) {
        match result {
            Ok(users) => {
                let employees = assign_attributes(users, self.assigner.as_mut());
                info!(count = employees.len(), "employee directory loaded");
                self.filtered_employees = employees.clone();
                self.employees = employees;
            }
            Err(error) => {
                warn!(%error, "failed to fetch employees");
                self.error = Some(error.to_string());
            }
        }
        self.loading = false;
    }

    pub fn toggle_bookmark(&mut self, id: EmployeeId) {
        if let Some(position) = self.bookmarks.iter().position(|bookmark| *bookmark == id) {
            self.bookmarks.remove(position);
            debug!(%id, "bookmark removed");
        } else {
            self.bookmarks.push(id);
            debug!(%id, "bookmark added");
        }
    }

    pub fn is_bookmarked(&self, id: EmployeeId) -> bool {
        self.bookmarks.contains(&id)
    }

    pub fn set_filtered_employees(&mut self, employees: Vec<Employee>) {
        self.filtered_employees = employees;
    }

    /// Raises the rating of `id` by one, capped at five, in both lists.
    pub fn promote_employee(&mut self, id: EmployeeId) {
        let mut promoted = None;
        for employee in self.employees.iter_mut().filter(|employee| employee.id == id) {
            employee.promote();
            promoted = Some(employee.performance);
        }
        for employee in self
            .filtered_employees
            .iter_mut()
            .filter(|employee| employee.id == id)
        {
            employee.promote();
        }
        match promoted {
            Some(performance) => info!(%id, %performance, "employee promoted"),
            None => debug!(%id, "promotion target not in directory"),
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Bookmarked employees in directory order. Bookmarks pointing at ids
    /// missing from the current directory are skipped.
    pub fn bookmarked_employees(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| self.is_bookmarked(employee.id))
            .collect()
    }

    /// Departments that currently have at least one employee, in order of
    /// first appearance.
    pub fn departments(&self) -> Vec<Department> {
        let mut seen = Vec::new();
        for employee in &self.employees {
            if !seen.contains(&employee.department) {
                seen.push(employee.department);
            }
        }
        seen
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
