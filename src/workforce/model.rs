use crate::core::catalog::Catalog;
use crate::core::store::{Entry, EntryDefaults, EntryId};
use serde::{Deserialize, Serialize};

/// Workforce figures for one location and period (VSME B6).
///
/// The gender counts are not required to add up to `total_headcount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceEntry {
    pub id: EntryId,
    pub location: String,
    pub period: String,
    pub total_headcount: u32,
    pub full_time: u32,
    pub part_time: u32,
    pub contractors: u32,
    pub male: u32,
    pub female: u32,
    pub other_gender: u32,
    pub management_total: u32,
    pub management_female: u32,
    pub new_hires: u32,
    pub voluntary_turnover: u32,
    pub involuntary_turnover: u32,
    pub training_hours_total: f64,
    pub avg_hourly_wage: f64,
    /// Total recordable incident rate (per 200,000 hours).
    pub trir: f64,
    /// Lost time incident rate (per 200,000 hours).
    pub ltir: f64,
    pub lost_days: u32,
    #[serde(default)]
    pub notes: String,
}

/// The integer columns of a [`WorkforceEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkforceCount {
    TotalHeadcount,
    FullTime,
    PartTime,
    Contractors,
    Male,
    Female,
    OtherGender,
    ManagementTotal,
    ManagementFemale,
    NewHires,
    VoluntaryTurnover,
    InvoluntaryTurnover,
    LostDays,
}

impl WorkforceEntry {
    /// Read one integer column.
    #[must_use]
    pub fn count(&self, field: WorkforceCount) -> u32 {
        match field {
            WorkforceCount::TotalHeadcount => self.total_headcount,
            WorkforceCount::FullTime => self.full_time,
            WorkforceCount::PartTime => self.part_time,
            WorkforceCount::Contractors => self.contractors,
            WorkforceCount::Male => self.male,
            WorkforceCount::Female => self.female,
            WorkforceCount::OtherGender => self.other_gender,
            WorkforceCount::ManagementTotal => self.management_total,
            WorkforceCount::ManagementFemale => self.management_female,
            WorkforceCount::NewHires => self.new_hires,
            WorkforceCount::VoluntaryTurnover => self.voluntary_turnover,
            WorkforceCount::InvoluntaryTurnover => self.involuntary_turnover,
            WorkforceCount::LostDays => self.lost_days,
        }
    }

    fn count_mut(&mut self, field: WorkforceCount) -> &mut u32 {
        match field {
            WorkforceCount::TotalHeadcount => &mut self.total_headcount,
            WorkforceCount::FullTime => &mut self.full_time,
            WorkforceCount::PartTime => &mut self.part_time,
            WorkforceCount::Contractors => &mut self.contractors,
            WorkforceCount::Male => &mut self.male,
            WorkforceCount::Female => &mut self.female,
            WorkforceCount::OtherGender => &mut self.other_gender,
            WorkforceCount::ManagementTotal => &mut self.management_total,
            WorkforceCount::ManagementFemale => &mut self.management_female,
            WorkforceCount::NewHires => &mut self.new_hires,
            WorkforceCount::VoluntaryTurnover => &mut self.voluntary_turnover,
            WorkforceCount::InvoluntaryTurnover => &mut self.involuntary_turnover,
            WorkforceCount::LostDays => &mut self.lost_days,
        }
    }

    /// Short site name: the part of `location` before the first `" - "`.
    #[must_use]
    pub fn site_name(&self) -> &str {
        match self.location.split(" - ").next() {
            Some(head) if !head.is_empty() => head,
            _ => &self.location,
        }
    }
}

/// Discrete edits of a [`WorkforceEntry`]. Plain field replacement.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkforceEdit {
    Count(WorkforceCount, u32),
    TrainingHours(f64),
    AvgHourlyWage(f64),
    Trir(f64),
    Ltir(f64),
    Location(String),
    Period(String),
    Notes(String),
}

impl Entry for WorkforceEntry {
    type Seed = ();
    type Edit = WorkforceEdit;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn create(id: EntryId, (): (), defaults: EntryDefaults<'_>) -> Self {
        Self {
            id,
            location: String::new(),
            period: defaults.period.to_string(),
            total_headcount: 0,
            full_time: 0,
            part_time: 0,
            contractors: 0,
            male: 0,
            female: 0,
            other_gender: 0,
            management_total: 0,
            management_female: 0,
            new_hires: 0,
            voluntary_turnover: 0,
            involuntary_turnover: 0,
            training_hours_total: 0.0,
            avg_hourly_wage: 0.0,
            trir: 0.0,
            ltir: 0.0,
            lost_days: 0,
            notes: String::new(),
        }
    }

    fn apply(&mut self, edit: WorkforceEdit, _catalog: &Catalog) {
        match edit {
            WorkforceEdit::Count(field, v) => *self.count_mut(field) = v,
            WorkforceEdit::TrainingHours(v) => self.training_hours_total = v,
            WorkforceEdit::AvgHourlyWage(v) => self.avg_hourly_wage = v,
            WorkforceEdit::Trir(v) => self.trir = v,
            WorkforceEdit::Ltir(v) => self.ltir = v,
            WorkforceEdit::Location(v) => self.location = v,
            WorkforceEdit::Period(v) => self.period = v,
            WorkforceEdit::Notes(v) => self.notes = v,
        }
    }
}
