//! Dashboard home figures: stat cards, activity feed, sales pipeline.
//!
//! All numbers are literals. The only derivation is pipeline totals and the
//! relative bar width of each stage.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Customer,
    Deal,
    Email,
    Invoice,
    Meeting,
}

impl ActivityKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Customer => "☺",
            Self::Deal => "★",
            Self::Email => "✉",
            Self::Invoice => "$",
            Self::Meeting => "◷",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub text: &'static str,
    pub time: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineStage {
    pub name: &'static str,
    pub deals: u32,
    pub value_cents: u64,
}

#[derive(Clone, Debug)]
pub struct HomeState {
    pub stats: Vec<Stat>,
    pub activity: Vec<Activity>,
    pub pipeline: Vec<PipelineStage>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self { stats: seed_stats(), activity: seed_activity(), pipeline: seed_pipeline() }
    }
}

impl HomeState {
    pub fn pipeline_total_cents(&self) -> u64 {
        self.pipeline.iter().map(|stage| stage.value_cents).sum()
    }

    pub fn pipeline_deal_count(&self) -> u32 {
        self.pipeline.iter().map(|stage| stage.deals).sum()
    }

    /// Stage value as a whole percentage of the largest stage, for bar widths.
    pub fn stage_width_pct(&self, stage: &PipelineStage) -> u64 {
        let max = self.pipeline.iter().map(|s| s.value_cents).max().unwrap_or(0);
        if max == 0 {
            return 0;
        }
        stage.value_cents * 100 / max
    }
}

fn seed_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Total Customers", value: "2,543", delta: "+12.5%", trend: Trend::Up },
        Stat { label: "Revenue", value: "$45,231", delta: "+20.1%", trend: Trend::Up },
        Stat { label: "Open Deals", value: "127", delta: "+8.2%", trend: Trend::Up },
        Stat { label: "Conversion Rate", value: "3.24%", delta: "-0.4%", trend: Trend::Down },
    ]
}

fn seed_activity() -> Vec<Activity> {
    vec![
        Activity { id: 1, kind: ActivityKind::Customer, text: "New customer Sarah Johnson signed up", time: "2 minutes ago" },
        Activity { id: 2, kind: ActivityKind::Deal, text: "Deal closed with TechCorp Inc. for $12,500", time: "1 hour ago" },
        Activity { id: 3, kind: ActivityKind::Email, text: "Spring campaign sent to 1,240 recipients", time: "3 hours ago" },
        Activity { id: 4, kind: ActivityKind::Invoice, text: "Invoice INV-0003 marked overdue", time: "5 hours ago" },
        Activity { id: 5, kind: ActivityKind::Meeting, text: "Demo scheduled with Global Solutions", time: "Yesterday" },
    ]
}

fn seed_pipeline() -> Vec<PipelineStage> {
    vec![
        PipelineStage { name: "Prospecting", deals: 42, value_cents: 8_400_000 },
        PipelineStage { name: "Qualification", deals: 35, value_cents: 12_250_000 },
        PipelineStage { name: "Proposal", deals: 28, value_cents: 15_680_000 },
        PipelineStage { name: "Negotiation", deals: 15, value_cents: 9_750_000 },
        PipelineStage { name: "Closed Won", deals: 7, value_cents: 5_320_000 },
    ]
}
