use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub revenue: f64,
    pub deliveries: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub stats: Vec<Stat>,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub status_distribution: Vec<StatusDistribution>,
}

impl Analytics {
    pub fn add_monthly(&mut self, entry: MonthlyPerformance) -> bool {
        if self
            .monthly_performance
            .iter()
            .any(|existing| existing.month == entry.month)
        {
            return false;
        }
        self.monthly_performance.push(entry);
        true
    }

    pub fn add_status(&mut self, entry: StatusDistribution) -> bool {
        if self
            .status_distribution
            .iter()
            .any(|existing| existing.status == entry.status)
        {
            return false;
        }
        self.status_distribution.push(entry);
        true
    }
}
