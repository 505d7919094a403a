use crate::ContentError;
use serde::{Deserialize, Serialize};

/// The fixed, ordered fragment pools every page draws from.
///
/// The pools are read-only for the lifetime of the process and are passed
/// explicitly into the builder rather than living as module globals, so the
/// builder stays a pure function. `Default` provides the built-in fragment
/// sets; deployments can override any pool from a JSON file (fields left out
/// keep their built-in contents).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentPools {
    pub themes: Vec<String>,
    pub channels: Vec<String>,
    pub personas: Vec<String>,
    pub automation: Vec<String>,
    pub creatives: Vec<String>,
    pub kpis: Vec<String>,
    pub experiments: Vec<String>,
    pub ctas: Vec<String>,
}

impl ContentPools {
    /// Checks that every pool holds at least one fragment.
    ///
    /// An empty pool is a configuration error and must be rejected before
    /// any generation starts; the selection arithmetic takes the index
    /// modulo the pool length.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (name, pool) in [
            ("themes", &self.themes),
            ("channels", &self.channels),
            ("personas", &self.personas),
            ("automation", &self.automation),
            ("creatives", &self.creatives),
            ("kpis", &self.kpis),
            ("experiments", &self.experiments),
            ("ctas", &self.ctas),
        ] {
            if pool.is_empty() {
                return Err(ContentError::EmptyPool(name));
            }
        }
        Ok(())
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ContentPools {
    fn default() -> Self {
        Self {
            themes: owned(&[
                "Lifecycle Automation",
                "Revenue Intelligence",
                "Demand Generation",
                "Content Velocity",
                "Product-Led Growth",
                "Community Flywheels",
                "ABM Precision",
                "Retention Architecture",
                "Partner Ecosystems",
                "Paid Media Orchestration",
            ]),
            channels: owned(&[
                "multi-channel nurture streams",
                "AI-enabled prospecting cadences",
                "conversion-optimized landing hubs",
                "multi-touch attribution models",
                "accelerated webinar launches",
                "search intent capture loops",
                "creativity-led social campaigns",
                "real-time personalization engines",
                "predictive churn interceptors",
                "account-based engagement kits",
            ]),
            personas: owned(&[
                "modern revenue leaders",
                "technical founders",
                "operations strategists",
                "growth product managers",
                "mid-market CMOs",
                "enterprise innovation teams",
                "marketplace operators",
                "customer success architects",
                "B2B influencer partners",
                "subscription-led marketers",
            ]),
            automation: owned(&[
                "behavior-triggered journeys",
                "progressive profiling tactics",
                "AI-generated personalization",
                "smart branching logic",
                "data enrichment playbooks",
                "self-optimizing cadences",
                "predictive scoring models",
                "cross-channel retargeting",
                "alerts for risk mitigation",
                "product signals activation",
            ]),
            creatives: owned(&[
                "story-driven sequences",
                "interactive dashboards",
                "animated explainers",
                "modular storytelling blocks",
                "visual narrative frameworks",
                "data storyboard sprints",
                "immersive microsite flows",
                "high-velocity video ads",
                "signature webinar worlds",
                "community storytelling arcs",
            ]),
            kpis: owned(&[
                "pipeline velocity",
                "qualified pipeline contribution",
                "time-to-value",
                "expansion ARR",
                "retention lift",
                "demo volume",
                "lead to SQL conversion",
                "win rate growth",
                "referral sourced revenue",
                "activation success index",
            ]),
            experiments: owned(&[
                "introduce a predictive incentive surfaced by AI-driven propensity scoring and run a challenger variant for seven days.",
                "launch a multi-step onboarding walkthrough that dynamically swaps content modules when engagement drops.",
                "pilot creative swaps inside the hero section across three personas and redistribute budget toward the winner every 48 hours.",
                "instrument heat, rage, and scroll maps into a KPI cockpit that triggers automated CRO tasks inside the sprint board.",
                "merge product usage and campaign response data to surface a real-time opportunity queue for sales development.",
                "spin up a micro-community sprint with curated AMAs and benchmark exchanges to convert followers into SQLs.",
                "build a predictive churn radar using enriched firmographic models and escalate risky accounts to lifecycle squads.",
                "layer a reverse trial experience onto the pricing page using triggered in-app modals and follow-up emails.",
                "deploy a partner-led ABM blitz with co-branded landing pages and orchestrated nurture tracks.",
                "launch a rolling webinar studio format with episodic storytelling, segment-specific offers, and rapid post-show sequences.",
            ]),
            ctas: owned(&[
                "Activate the campaign cockpit template to start orchestrating the strategy in under an hour.",
                "Copy the lifecycle canvas into your workspace and prioritize the quick-win experiments today.",
                "Bring the intelligence dashboard online and align your revenue teams around shared KPIs.",
                "Clone the resource stack checklist to ensure tooling gaps are eliminated before launch.",
                "Adapt the creative blueprint and distribute the narrative across every owned and paid channel.",
                "Use the sprint retro questions to catalogue insights and inform the next iteration immediately.",
                "Plug the ABM scoring model into your CRM to focus attention on the right accounts.",
                "Integrate the retention monitors with product analytics to catch churn risk hours earlier.",
                "Apply the experimentation rubric to guarantee statistical rigor and confident decision making.",
                "Download the analytics glossary to keep cross-functional teams aligned on definitions.",
            ]),
        }
    }
}
