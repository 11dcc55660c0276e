use super::model::{WorkforceCount, WorkforceEntry};
use crate::core::conversions::{percentage, safe_ratio, weighted_mean};
use crate::core::store::EntryStore;
use serde::Serialize;

/// Column sums plus the derived rates. Every rate is 0 when its denominator is 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkforceSummary {
    pub total_headcount: u64,
    pub full_time: u64,
    pub part_time: u64,
    pub contractors: u64,
    pub male: u64,
    pub female: u64,
    pub other_gender: u64,
    pub management_total: u64,
    pub management_female: u64,
    pub new_hires: u64,
    pub voluntary_turnover: u64,
    pub involuntary_turnover: u64,
    pub lost_days: u64,
    pub training_hours_total: f64,

    pub female_pct: f64,
    pub management_female_pct: f64,
    pub turnover_rate_pct: f64,
    pub new_hire_rate_pct: f64,
    pub avg_training_hours: f64,
    /// Hourly wage weighted by each entry's headcount.
    pub weighted_avg_wage: f64,
    pub weighted_trir: f64,
    pub weighted_ltir: f64,
}

impl WorkforceSummary {
    #[must_use]
    pub fn total_turnover(&self) -> u64 {
        self.voluntary_turnover + self.involuntary_turnover
    }

    /// Male/female/other counts, leaving out zero slices.
    #[must_use]
    pub fn gender_split(&self) -> Vec<(&'static str, u64)> {
        [
            ("Male", self.male),
            ("Female", self.female),
            ("Other", self.other_gender),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0)
        .collect()
    }

    /// Full-time/part-time/contractor counts, leaving out zero slices.
    #[must_use]
    pub fn employment_split(&self) -> Vec<(&'static str, u64)> {
        [
            ("Full-Time", self.full_time),
            ("Part-Time", self.part_time),
            ("Contractors", self.contractors),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0)
        .collect()
    }
}

/// Headcount and female share of one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationHeadcount {
    pub name: String,
    pub headcount: u32,
    pub female_pct: f64,
}

fn column(entries: &[WorkforceEntry], field: WorkforceCount) -> u64 {
    entries.iter().map(|e| u64::from(e.count(field))).sum()
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(v: u64) -> f64 {
    v as f64
}

#[must_use]
pub fn summarize(entries: &[WorkforceEntry]) -> WorkforceSummary {
    let mut s = WorkforceSummary {
        total_headcount: column(entries, WorkforceCount::TotalHeadcount),
        full_time: column(entries, WorkforceCount::FullTime),
        part_time: column(entries, WorkforceCount::PartTime),
        contractors: column(entries, WorkforceCount::Contractors),
        male: column(entries, WorkforceCount::Male),
        female: column(entries, WorkforceCount::Female),
        other_gender: column(entries, WorkforceCount::OtherGender),
        management_total: column(entries, WorkforceCount::ManagementTotal),
        management_female: column(entries, WorkforceCount::ManagementFemale),
        new_hires: column(entries, WorkforceCount::NewHires),
        voluntary_turnover: column(entries, WorkforceCount::VoluntaryTurnover),
        involuntary_turnover: column(entries, WorkforceCount::InvoluntaryTurnover),
        lost_days: column(entries, WorkforceCount::LostDays),
        training_hours_total: entries.iter().map(|e| e.training_hours_total).sum(),
        ..WorkforceSummary::default()
    };

    let headcount = as_f64(s.total_headcount);
    s.female_pct = percentage(as_f64(s.female), headcount);
    s.management_female_pct = percentage(as_f64(s.management_female), as_f64(s.management_total));
    s.turnover_rate_pct = percentage(as_f64(s.total_turnover()), headcount);
    s.new_hire_rate_pct = percentage(as_f64(s.new_hires), headcount);
    s.avg_training_hours = safe_ratio(s.training_hours_total, headcount);

    let weighted = |value: fn(&WorkforceEntry) -> f64| {
        weighted_mean(
            entries
                .iter()
                .map(|e| (value(e), f64::from(e.total_headcount))),
        )
    };
    s.weighted_avg_wage = weighted(|e| e.avg_hourly_wage);
    s.weighted_trir = weighted(|e| e.trir);
    s.weighted_ltir = weighted(|e| e.ltir);
    s
}

/// Per-site headcount and female share, in entry order.
#[must_use]
pub fn location_breakdown(entries: &[WorkforceEntry]) -> Vec<LocationHeadcount> {
    entries
        .iter()
        .map(|e| LocationHeadcount {
            name: e.site_name().to_string(),
            headcount: e.total_headcount,
            female_pct: percentage(f64::from(e.female), f64::from(e.total_headcount)),
        })
        .collect()
}

impl EntryStore<WorkforceEntry> {
    #[must_use]
    pub fn summary(&self) -> WorkforceSummary {
        summarize(self.entries())
    }
}
