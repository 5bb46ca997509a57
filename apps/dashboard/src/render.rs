use std::fmt::Write as _;

use dashboard_core::AnalyticsReport;
use serde::Serialize;
use shared::domain::{Employee, Performance, PerformanceTier};

#[derive(Debug, Serialize)]
pub struct EmployeeView<'a> {
    #[serde(flatten)]
    pub employee: &'a Employee,
    pub tier: PerformanceTier,
    pub bookmarked: bool,
}

impl<'a> EmployeeView<'a> {
    pub fn new(employee: &'a Employee, bookmarked: bool) -> Self {
        Self {
            employee,
            tier: employee.performance.tier(),
            bookmarked,
        }
    }
}

pub fn stars(performance: Performance) -> String {
    (Performance::MIN..=Performance::MAX)
        .map(|step| if step <= performance.get() { '★' } else { '☆' })
        .collect()
}

fn tier_label(tier: PerformanceTier) -> &'static str {
    match tier {
        PerformanceTier::Strong => "strong",
        PerformanceTier::Solid => "solid",
        PerformanceTier::Developing => "developing",
        PerformanceTier::AtRisk => "at risk",
    }
}

pub fn employee_table(employees: &[EmployeeView<'_>]) -> String {
    if employees.is_empty() {
        return "No employees found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:<40} {:>3}  {:<12} {}",
        "ID", "NAME", "EMAIL", "AGE", "DEPARTMENT", "RATING"
    );
    for view in employees {
        let employee = view.employee;
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:<40} {:>3}  {:<12} {:<6} {}",
            employee.id.0,
            employee.full_name(),
            employee.email,
            employee.age,
            employee.department.as_str(),
            stars(employee.performance),
            if view.bookmarked { "[bookmarked]" } else { "" }
        );
    }
    out
}

pub fn employee_detail(view: &EmployeeView<'_>) -> String {
    let employee = view.employee;
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", employee.full_name(), employee.id);
    let _ = writeln!(out, "  email:       {}", employee.email);
    let _ = writeln!(out, "  age:         {}", employee.age);
    let _ = writeln!(out, "  department:  {}", employee.department);
    let _ = writeln!(
        out,
        "  performance: {} {} stars ({})",
        stars(employee.performance),
        employee.performance,
        tier_label(view.tier)
    );
    let _ = writeln!(
        out,
        "  bookmarked:  {}",
        if view.bookmarked { "yes" } else { "no" }
    );
    out
}

pub fn analytics(report: &AnalyticsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Department statistics");
    let _ = writeln!(out, "  {:<12} {:>9} {:>8}", "DEPARTMENT", "EMPLOYEES", "AVG");
    for stats in &report.departments {
        let _ = writeln!(
            out,
            "  {:<12} {:>9} {:>8.1}",
            stats.name.as_str(),
            stats.count,
            stats.avg_performance
        );
    }

    let _ = writeln!(out, "\nPerformance distribution");
    for (index, count) in report.performance_distribution.iter().enumerate() {
        let rating = index + 1;
        let label = if rating == 1 { "Star" } else { "Stars" };
        let _ = writeln!(out, "  {rating} {label:<5} {count:>3} {}", "#".repeat(*count));
    }

    let _ = writeln!(out, "\nBookmark trends (last 7 days, sample data)");
    for point in &report.bookmark_trend {
        let _ = writeln!(out, "  {:<7} {:>3}", point.date, point.count);
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
