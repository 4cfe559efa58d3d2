//! Static content catalog.
//!
//! Every page's content is literal data built once by [`Catalog::builtin`].
//! Nothing here is created or destroyed at runtime; widget state in
//! [`crate::state`] refers back into these collections.
//!
//! Display attributes (color tags, icon ids) are opaque strings passed through
//! to the renderer unchanged.

mod architecture;
mod cicd;
mod home;
mod implementation;
mod monitoring;
mod security;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::page::Page;
use crate::state::tabs::{check_coverage, TabKey};

/// Errors found while validating catalog content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate diagram node id '{0}'")]
    DuplicateNode(String),

    #[error("diagram node '{id}' is positioned outside 0..=100 ({x}, {y})")]
    PositionOutOfRange { id: String, x: u8, y: u8 },

    #[error("no content for tab '{0}'")]
    MissingTabContent(String),

    #[error("tab '{0}' has more than one content record")]
    DuplicateTabContent(String),

    #[error("pipeline has no stages")]
    EmptyPipeline,
}

// ── Opaque display attributes ───────────────────────────────────────

/// Styling tag (e.g. `bg-green-500`), interpreted only by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorTag(pub &'static str);

/// Icon identifier (e.g. `shield`), interpreted only by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconId(pub &'static str);

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ── Shared content shapes ───────────────────────────────────────────

/// Page heading and lead paragraph.
#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// A headline figure ("99.9%" / "Uptime SLA").
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub name: &'static str,
    pub value: &'static str,
    pub icon: IconId,
}

/// A titled card with an optional bullet list.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Option<IconId>,
    pub color: Option<ColorTag>,
    pub items: Vec<&'static str>,
}

/// A headed group of cards.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<Card>,
}

/// A link to another page.
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub label: &'static str,
    pub description: &'static str,
    pub page: Page,
}

/// Closing banner with links onward.
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub links: Vec<PageLink>,
}

/// A label/value row in a settings table.
#[derive(Debug, Clone, Serialize)]
pub struct Setting {
    pub label: &'static str,
    pub value: &'static str,
    pub color: ColorTag,
}

// ── Architecture ────────────────────────────────────────────────────

/// Percentage coordinates within the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// A component on the interactive architecture diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramNode {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub position: Position,
    pub color: ColorTag,
    pub icon: IconId,
}

impl DiagramNode {
    /// First two words of the title, used as the on-canvas label.
    pub fn short_title(&self) -> String {
        self.title
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: ColorTag,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureContent {
    pub hero: Hero,
    pub diagram_title: &'static str,
    pub badges: Vec<&'static str>,
    pub nodes: Vec<DiagramNode>,
    pub legend: Vec<LegendEntry>,
    pub layers: Section,
    pub explore: Vec<PageLink>,
}

// ── CI/CD ───────────────────────────────────────────────────────────

/// Display status of a pipeline stage. Assigned statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Running => "running",
            StageStatus::Completed => "completed",
            StageStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub status: StageStatus,
    pub duration: &'static str,
    pub description: &'static str,
    pub icon: IconId,
}

#[derive(Debug, Clone, Serialize)]
pub struct GitOpsStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CicdContent {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub pipeline_title: &'static str,
    pub pipeline_subtitle: &'static str,
    pub stages: Vec<PipelineStage>,
    pub strategies: Section,
    pub gitops_title: &'static str,
    pub gitops_subtitle: &'static str,
    pub gitops_steps: Vec<GitOpsStep>,
    pub pipeline_settings: Vec<Setting>,
    pub quality_gates: Vec<&'static str>,
}

// ── Monitoring ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub color: ColorTag,
}

/// Key for the monitoring dashboard's category selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategoryKey {
    #[default]
    Infrastructure,
    GpuResources,
    Applications,
}

impl TabKey for MetricCategoryKey {
    const ALL: &'static [Self] = &[
        MetricCategoryKey::Infrastructure,
        MetricCategoryKey::GpuResources,
        MetricCategoryKey::Applications,
    ];

    fn slug(self) -> &'static str {
        match self {
            MetricCategoryKey::Infrastructure => "infrastructure",
            MetricCategoryKey::GpuResources => "gpu_resources",
            MetricCategoryKey::Applications => "applications",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCategory {
    pub key: MetricCategoryKey,
    pub category: &'static str,
    pub icon: IconId,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertSeverity {
    pub level: &'static str,
    pub count: u32,
    pub color: ColorTag,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlaMetric {
    pub metric: &'static str,
    pub target: &'static str,
    pub current: &'static str,
    pub healthy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringContent {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub dashboard_title: &'static str,
    pub dashboard_subtitle: &'static str,
    pub categories: Vec<MetricCategory>,
    pub components: Section,
    pub alerts: Vec<AlertSeverity>,
    pub sla: Vec<SlaMetric>,
}

// ── Security ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceStatus {
    Compliant,
    #[serde(rename = "In Progress")]
    InProgress,
    Ready,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::InProgress => "In Progress",
            ComplianceStatus::Ready => "Ready",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceFramework {
    pub name: &'static str,
    pub status: ComplianceStatus,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityContent {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub layers: Section,
    pub controls: Section,
    pub compliance_title: &'static str,
    pub compliance_subtitle: &'static str,
    pub compliance: Vec<ComplianceFramework>,
}

// ── Implementation ──────────────────────────────────────────────────

/// Key for the implementation page's code example tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKey {
    #[default]
    Deployment,
    Cicd,
    Security,
    Monitoring,
}

impl TabKey for ExampleKey {
    const ALL: &'static [Self] = &[
        ExampleKey::Deployment,
        ExampleKey::Cicd,
        ExampleKey::Security,
        ExampleKey::Monitoring,
    ];

    fn slug(self) -> &'static str {
        match self {
            ExampleKey::Deployment => "deployment",
            ExampleKey::Cicd => "cicd",
            ExampleKey::Security => "security",
            ExampleKey::Monitoring => "monitoring",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeExample {
    pub key: ExampleKey,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
    pub language: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImplementationContent {
    pub hero: Hero,
    pub examples: Vec<CodeExample>,
    pub features: Section,
    pub download: CallToAction,
    pub download_label: &'static str,
}

// ── Home ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    pub hero: Hero,
    pub primary_links: Vec<PageLink>,
    pub stats: Vec<Stat>,
    pub features: Section,
    pub cta: CallToAction,
}

// ── Catalog ─────────────────────────────────────────────────────────

/// All presentation content.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub brand: &'static str,
    pub home: HomeContent,
    pub architecture: ArchitectureContent,
    pub security: SecurityContent,
    pub cicd: CicdContent,
    pub monitoring: MonitoringContent,
    pub implementation: ImplementationContent,
}

impl Catalog {
    /// The built-in content for the Cortex AI Platform.
    pub fn builtin() -> Self {
        Self {
            brand: "Cortex AI Platform",
            home: home::content(),
            architecture: architecture::content(),
            security: security::content(),
            cicd: cicd::content(),
            monitoring: monitoring::content(),
            implementation: implementation::content(),
        }
    }

    pub fn hero(&self, page: Page) -> &Hero {
        match page {
            Page::Home => &self.home.hero,
            Page::Architecture => &self.architecture.hero,
            Page::Security => &self.security.hero,
            Page::CiCd => &self.cicd.hero,
            Page::Monitoring => &self.monitoring.hero,
            Page::Implementation => &self.implementation.hero,
        }
    }

    /// Check the structural invariants the widget state relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for node in &self.architecture.nodes {
            if !seen.insert(node.id) {
                return Err(CatalogError::DuplicateNode(node.id.to_string()));
            }
            if node.position.x > 100 || node.position.y > 100 {
                return Err(CatalogError::PositionOutOfRange {
                    id: node.id.to_string(),
                    x: node.position.x,
                    y: node.position.y,
                });
            }
        }

        if self.cicd.stages.is_empty() {
            return Err(CatalogError::EmptyPipeline);
        }

        check_coverage(self.implementation.examples.iter().map(|e| e.key))?;
        check_coverage(self.monitoring.categories.iter().map(|c| c.key))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_counts() {
        let c = Catalog::builtin();
        assert_eq!(c.architecture.nodes.len(), 8);
        assert_eq!(c.cicd.stages.len(), 6);
        assert_eq!(c.implementation.examples.len(), 4);
        assert_eq!(c.monitoring.categories.len(), 3);
        assert_eq!(c.security.compliance.len(), 4);
    }

    #[test]
    fn duplicate_node_rejected() {
        let mut c = Catalog::builtin();
        let dup = c.architecture.nodes[0].clone();
        c.architecture.nodes.push(dup);
        assert_eq!(
            c.validate(),
            Err(CatalogError::DuplicateNode("ingress".to_string()))
        );
    }

    #[test]
    fn out_of_range_position_rejected() {
        let mut c = Catalog::builtin();
        c.architecture.nodes[1].position = Position { x: 101, y: 5 };
        assert!(matches!(
            c.validate(),
            Err(CatalogError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn missing_example_rejected() {
        let mut c = Catalog::builtin();
        c.implementation.examples.retain(|e| e.key != ExampleKey::Security);
        assert_eq!(
            c.validate(),
            Err(CatalogError::MissingTabContent("security".to_string()))
        );
    }

    #[test]
    fn empty_pipeline_rejected() {
        let mut c = Catalog::builtin();
        c.cicd.stages.clear();
        assert_eq!(c.validate(), Err(CatalogError::EmptyPipeline));
    }

    #[test]
    fn short_title_takes_two_words() {
        let c = Catalog::builtin();
        let gpu = c.architecture.nodes.iter().find(|n| n.id == "gpu-nodes").unwrap();
        assert_eq!(gpu.short_title(), "GPU Worker");
    }

    #[test]
    fn catalog_serializes() {
        let json = serde_json::to_value(Catalog::builtin()).unwrap();
        assert_eq!(json["architecture"]["nodes"][0]["id"], "ingress");
        assert_eq!(json["cicd"]["stages"][3]["status"], "running");
        assert_eq!(json["security"]["compliance"][1]["status"], "In Progress");
    }
}
