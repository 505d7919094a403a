use crate::{ContentError, ContentPools};

/// Per-pool index strides. Each pool advances at its own rate, so the
/// combination of fragments on a page changes even when two pools have the
/// same length. Experiments deliberately advance at stride 1 alongside
/// themes; the two never appear in the same sentence.
const THEME_STRIDE: usize = 1;
const CHANNEL_STRIDE: usize = 3;
const PERSONA_STRIDE: usize = 5;
const AUTOMATION_STRIDE: usize = 7;
const CREATIVE_STRIDE: usize = 2;
const KPI_STRIDE: usize = 4;
const EXPERIMENT_STRIDE: usize = 1;
const CTA_STRIDE: usize = 6;

/// The fully resolved content for one output page.
///
/// Building this record is a pure function of the page index and the pool
/// contents; repeated calls with the same inputs yield identical records.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub subtitle: String,
    pub narrative: String,
    pub key_points: Vec<String>,
    pub metrics: String,
    pub experiment: String,
    pub call_to_action: String,
    /// Raw fragments retained for downstream checklist composition.
    pub theme: String,
    pub automation: String,
    pub creative: String,
}

fn select<'a>(
    pool: &'a [String],
    name: &'static str,
    index: usize,
    stride: usize,
) -> Result<&'a str, ContentError> {
    if pool.is_empty() {
        return Err(ContentError::EmptyPool(name));
    }
    Ok(&pool[(index * stride) % pool.len()])
}

fn narrative(
    theme: &str,
    channel: &str,
    persona: &str,
    automation: &str,
    creative: &str,
    kpi: &str,
) -> String {
    format!(
        "This playbook orchestrates {channel} to engage {persona} while reinforcing {theme}. \
         Focus on {automation} and {creative} to accelerate {kpi}. Blend qualitative research \
         with performance telemetry to build messaging that speaks directly to urgent pains \
         and emerging aspirations.",
        theme = theme.to_lowercase(),
    )
}

fn supporting_narrative(persona: &str, automation: &str, creative: &str) -> String {
    format!(
        "Operationalize the experience with {automation} layered onto {creative}. Equip pods \
         with enablement snapshots so every collaborator understands why the journey resonates \
         for {persona}. Anchor reporting to north-star metrics while capturing directional \
         signals from rapid tests."
    )
}

/// Builds the content record for a single page index.
///
/// Fails only on the configuration-error class (an empty pool); for valid
/// pools the function is total over all indices.
pub fn build_page(pools: &ContentPools, index: usize) -> Result<PageContent, ContentError> {
    let theme = select(&pools.themes, "themes", index, THEME_STRIDE)?;
    let channel = select(&pools.channels, "channels", index, CHANNEL_STRIDE)?;
    let persona = select(&pools.personas, "personas", index, PERSONA_STRIDE)?;
    let automation = select(&pools.automation, "automation", index, AUTOMATION_STRIDE)?;
    let creative = select(&pools.creatives, "creatives", index, CREATIVE_STRIDE)?;
    let kpi = select(&pools.kpis, "kpis", index, KPI_STRIDE)?;
    let experiment = select(&pools.experiments, "experiments", index, EXPERIMENT_STRIDE)?;
    let cta = select(&pools.ctas, "ctas", index, CTA_STRIDE)?;

    let key_points = vec![
        format!("Prioritize {channel} with playbooks that serve {persona}."),
        format!("Reinforce positioning through {creative} and a consistent narrative arc."),
        format!("Operationalize {automation} to keep journeys responsive and contextual."),
        format!("Instrument measurement around {kpi} to communicate business value."),
        "Scale collaboration with cross-functional rituals and shared dashboards.".to_string(),
    ];

    Ok(PageContent {
        title: format!("Module {}: {} Launch System", index + 1, theme),
        subtitle: format!("Blueprint {} · {}", index + 1, channel),
        narrative: format!(
            "{} {}",
            narrative(theme, channel, persona, automation, creative, kpi),
            supporting_narrative(persona, automation, creative),
        ),
        key_points,
        metrics: format!("North-star KPI · {}", kpi.to_uppercase()),
        experiment: experiment.to_string(),
        call_to_action: cta.to_string(),
        theme: theme.to_string(),
        automation: automation.to_string(),
        creative: creative.to_string(),
    })
}

/// Builds the ordered page sequence for a whole document.
pub fn build_pages(pools: &ContentPools, total_pages: usize) -> Result<Vec<PageContent>, ContentError> {
    (0..total_pages).map(|index| build_page(pools, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(a: usize, b: usize) -> usize {
        if b == 0 { a } else { gcd(b, a % b) }
    }

    #[test]
    fn build_is_deterministic() {
        let pools = ContentPools::default();
        for index in [0, 7, 42, 79] {
            let a = build_page(&pools, index).unwrap();
            let b = build_page(&pools, index).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn theme_cycles_with_pool_length() {
        let pools = ContentPools::default();
        let first = build_page(&pools, 0).unwrap();
        let wrapped = build_page(&pools, 10).unwrap();
        assert_eq!(first.theme, wrapped.theme);
        assert_eq!(first.title, "Module 1: Lifecycle Automation Launch System");
        assert_eq!(wrapped.title, "Module 11: Lifecycle Automation Launch System");
    }

    #[test]
    fn adjacent_pages_differ() {
        let pools = ContentPools::default();
        let a = build_page(&pools, 0).unwrap();
        let b = build_page(&pools, 1).unwrap();
        assert_ne!(a.subtitle, b.subtitle);
        assert_ne!(a.narrative, b.narrative);
        assert_ne!(a.call_to_action, b.call_to_action);
    }

    #[test]
    fn stride_cycle_selects_len_over_gcd_distinct_fragments() {
        // A stride coprime with the pool length covers the whole pool within
        // one cycle; otherwise exactly len/gcd(stride, len) fragments recur.
        let pools = ContentPools::default();
        let cases = [
            (&pools.channels, "channels", CHANNEL_STRIDE),
            (&pools.personas, "personas", PERSONA_STRIDE),
            (&pools.automation, "automation", AUTOMATION_STRIDE),
            (&pools.creatives, "creatives", CREATIVE_STRIDE),
            (&pools.kpis, "kpis", KPI_STRIDE),
            (&pools.ctas, "ctas", CTA_STRIDE),
        ];
        for (pool, name, stride) in cases {
            let len = pool.len();
            let mut seen = std::collections::HashSet::new();
            for index in 0..len {
                seen.insert(select(pool, name, index, stride).unwrap().to_string());
            }
            assert_eq!(seen.len(), len / gcd(stride, len), "pool {name}");
        }
    }

    #[test]
    fn full_coverage_for_coprime_strides() {
        let pools = ContentPools::default();
        let mut automations = std::collections::HashSet::new();
        for index in 0..pools.automation.len() {
            automations.insert(build_page(&pools, index).unwrap().automation);
        }
        assert_eq!(automations.len(), pools.automation.len());
    }

    #[test]
    fn metrics_is_uppercased_kpi_with_label() {
        let pools = ContentPools::default();
        let page = build_page(&pools, 0).unwrap();
        assert_eq!(page.metrics, "North-star KPI · PIPELINE VELOCITY");
    }

    #[test]
    fn empty_pool_fails_fast() {
        let mut pools = ContentPools::default();
        pools.experiments.clear();
        let err = build_page(&pools, 0).unwrap_err();
        assert!(matches!(err, ContentError::EmptyPool("experiments")));
    }

    #[test]
    fn build_pages_produces_requested_count() {
        let pools = ContentPools::default();
        assert_eq!(build_pages(&pools, 80).unwrap().len(), 80);
        assert!(build_pages(&pools, 0).unwrap().is_empty());
    }
}
