use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::domain::{Department, Employee, Performance};

pub const TREND_DAYS: u64 = 7;
const TREND_MIN_COUNT: u32 = 5;
const TREND_SPREAD: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub name: Department,
    pub count: usize,
    /// Mean rating, rounded to one decimal place.
    pub avg_performance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkTrendPoint {
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub departments: Vec<DepartmentStats>,
    pub performance_distribution: [usize; Performance::MAX as usize],
    pub bookmark_trend: Vec<BookmarkTrendPoint>,
}

impl AnalyticsReport {
    pub fn build<R: Rng>(employees: &[Employee], rng: &mut R, today: NaiveDate) -> Self {
        Self {
            departments: department_stats(employees),
            performance_distribution: performance_distribution(employees),
            bookmark_trend: bookmark_trend(rng, today),
        }
    }
}

/// Per-department headcount and mean rating, in order of first appearance.
/// Departments without employees are left out.
pub fn department_stats(employees: &[Employee]) -> Vec<DepartmentStats> {
    let mut groups: Vec<(Department, usize, u32)> = Vec::new();
    for employee in employees {
        let rating = u32::from(employee.performance.get());
        match groups
            .iter_mut()
            .find(|(department, _, _)| *department == employee.department)
        {
            Some((_, count, total)) => {
                *count += 1;
                *total += rating;
            }
            None => groups.push((employee.department, 1, rating)),
        }
    }

    groups
        .into_iter()
        .map(|(name, count, total)| DepartmentStats {
            name,
            count,
            avg_performance: round_to_tenth(f64::from(total) / count as f64),
        })
        .collect()
}

/// Headcount per rating; index 0 holds rating 1.
pub fn performance_distribution(employees: &[Employee]) -> [usize; Performance::MAX as usize] {
    let mut buckets = [0; Performance::MAX as usize];
    for employee in employees {
        buckets[usize::from(employee.performance.get() - Performance::MIN)] += 1;
    }
    buckets
}

/// Placeholder series for the bookmark chart.
///
/// There is no bookmark history to aggregate; the counts are random draws,
/// one per day, oldest first and ending on `today`.
pub fn bookmark_trend<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<BookmarkTrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
            BookmarkTrendPoint {
                date: date.format("%b %-d").to_string(),
                count: TREND_MIN_COUNT + rng.gen_range(0..TREND_SPREAD),
            }
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "tests/analytics_tests.rs"]
mod tests;
