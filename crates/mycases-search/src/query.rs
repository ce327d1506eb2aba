use crate::index::CaseSummary;

/// Search box criteria. Blank fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    /// Case-insensitive substring of the child's name.
    pub name: Option<String>,
    /// Exact whole-years age, e.g. "7".
    pub age_years: Option<String>,
    /// Case-insensitive substring of the diagnosis.
    pub diagnosis: Option<String>,
}

impl CaseFilter {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.age_years, &self.diagnosis]
            .into_iter()
            .all(|c| active(c).is_none())
    }

    pub fn matches(&self, summary: &CaseSummary) -> bool {
        if let Some(name) = active(&self.name)
            && !contains_folded(&summary.child_name, name)
        {
            return false;
        }
        if let Some(age) = active(&self.age_years)
            && summary.age_years != age
        {
            return false;
        }
        if let Some(diagnosis) = active(&self.diagnosis)
            && !contains_folded(&summary.diagnosis, diagnosis)
        {
            return false;
        }
        true
    }
}

/// Summaries matching every active criterion, in their original order.
pub fn filter(cases: &[CaseSummary], criteria: &CaseFilter) -> Vec<CaseSummary> {
    cases
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect()
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().map(str::trim).filter(|c| !c.is_empty())
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
