//! Sortable skills table for the profile page.
//!
//! Clicking a column header sets it as the sort key (ascending by default);
//! clicking the active column again flips the direction. The backing rows are
//! a static dataset; each read re-sorts the full list, which is acceptable
//! because entry names are unique.

use serde::{Deserialize, Serialize};

/// Year the "Current" recency marker substitutes to before numeric
/// comparison, making it sort as the most-recent possible value.
/// Implementation-defined: extend with care if new sentinels appear.
const CURRENT_SENTINEL_YEAR: i32 = 2025;

pub const CURRENT_MARKER: &str = "Current";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Skill,
    Software,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub kind: SkillKind,
    pub years: f64,
    /// A four-digit year, or the `"Current"` marker.
    pub last_used: String,
}

impl SkillRecord {
    fn new(name: &str, kind: SkillKind, years: f64, last_used: &str) -> Self {
        SkillRecord {
            name: name.to_string(),
            kind,
            years,
            last_used: last_used.to_string(),
        }
    }

    pub fn is_current(&self) -> bool {
        self.last_used == CURRENT_MARKER
    }

    fn recency_year(&self) -> i32 {
        if self.is_current() {
            CURRENT_SENTINEL_YEAR
        } else {
            self.last_used.parse().unwrap_or(0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Years,
    LastUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone)]
pub struct SkillsTable {
    rows: Vec<SkillRecord>,
    sort: Option<(SortColumn, SortDirection)>,
}

impl SkillsTable {
    pub fn new(rows: Vec<SkillRecord>) -> Self {
        SkillsTable { rows, sort: None }
    }

    /// The dataset shared between the profile page and the skills
    /// intelligence step.
    pub fn seeded() -> Self {
        use SkillKind::{Skill, Software};
        Self::new(vec![
            SkillRecord::new("Agile Development", Skill, 1.7, "2020"),
            SkillRecord::new("ASP.NET", Software, 1.3, "2020"),
            SkillRecord::new("AWS Cloud Platform", Software, 1.5, "2024"),
            SkillRecord::new("C# .NET", Software, 1.5, "2020"),
            SkillRecord::new("C++", Skill, 0.7, CURRENT_MARKER),
            SkillRecord::new("Confluence Documentation Tool", Software, 1.5, "2022"),
            SkillRecord::new("Cross-functional Leadership", Skill, 1.5, "2022"),
            SkillRecord::new("Data Analysis", Skill, 1.5, "2022"),
            SkillRecord::new("DO-178C Standards", Skill, 0.5, CURRENT_MARKER),
            SkillRecord::new("Docker Software", Software, 1.0, "2024"),
            SkillRecord::new("Embedded Systems", Skill, 0.7, CURRENT_MARKER),
        ])
    }

    /// Selects `column` as the sort key with ascending default, or flips the
    /// direction when `column` is already active.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => {
                Some((column, SortDirection::Ascending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    /// Rows in display order: seed order when unsorted, otherwise a fresh
    /// sort of the full dataset under the active key and direction.
    pub fn rows(&self) -> Vec<SkillRecord> {
        let mut rows = self.rows.clone();
        let Some((column, direction)) = self.sort else {
            return rows;
        };

        rows.sort_by(|a, b| {
            let ordering = match column {
                SortColumn::Years => a
                    .years
                    .partial_cmp(&b.years)
                    .unwrap_or(std::cmp::Ordering::Equal),
                SortColumn::LastUsed => a.recency_year().cmp(&b.recency_year()),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[SkillRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_unsorted_returns_seed_order() {
        let table = SkillsTable::seeded();
        assert_eq!(names(&table.rows())[0], "Agile Development");
        assert!(table.sort().is_none());
    }

    #[test]
    fn test_first_click_sorts_ascending() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::Years);
        assert_eq!(
            table.sort(),
            Some((SortColumn::Years, SortDirection::Ascending))
        );
        let rows = table.rows();
        assert!(rows.windows(2).all(|w| w[0].years <= w[1].years));
    }

    #[test]
    fn test_second_click_flips_direction() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::Years);
        table.sort_by(SortColumn::Years);
        assert_eq!(
            table.sort(),
            Some((SortColumn::Years, SortDirection::Descending))
        );
        let rows = table.rows();
        assert!(rows.windows(2).all(|w| w[0].years >= w[1].years));
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::Years);
        table.sort_by(SortColumn::Years);
        table.sort_by(SortColumn::LastUsed);
        assert_eq!(
            table.sort(),
            Some((SortColumn::LastUsed, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_three_clicks_round_trip_to_first_ascending_order() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::LastUsed);
        let first = names(&table.rows())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        table.sort_by(SortColumn::LastUsed);
        table.sort_by(SortColumn::LastUsed);
        let third = names(&table.rows())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        // Round-trips to the first ascending sort, not the pre-sort seed order.
        assert_eq!(first, third);
    }

    #[test]
    fn test_current_marker_sorts_as_most_recent() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::LastUsed);
        let rows = table.rows();
        // Ascending: every "Current" row lands after every literal-year row.
        let last_literal = rows.iter().rposition(|r| !r.is_current());
        let first_current = rows.iter().position(|r| r.is_current());
        match (last_literal, first_current) {
            (Some(literal), Some(current)) => {
                assert!(literal < current, "Current must outrank any literal year")
            }
            _ => panic!("seed data should contain both current and dated rows"),
        }
    }

    #[test]
    fn test_descending_puts_current_first() {
        let mut table = SkillsTable::seeded();
        table.sort_by(SortColumn::LastUsed);
        table.sort_by(SortColumn::LastUsed);
        let rows = table.rows();
        assert!(rows[0].is_current());
    }
}
