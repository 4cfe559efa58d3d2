use super::{
    Card, CicdContent, ColorTag, GitOpsStep, Hero, IconId, PipelineStage, Section, Setting,
    StageStatus, Stat,
};

fn strategy(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &[&'static str],
) -> Card {
    Card {
        title,
        description,
        icon: Some(IconId(icon)),
        color: None,
        items: features.to_vec(),
    }
}

/// Stages of the live pipeline for the document-intelligence service.
pub(super) fn stages() -> Vec<PipelineStage> {
    vec![
        PipelineStage {
            name: "Security Scan",
            status: StageStatus::Completed,
            duration: "2m 15s",
            description: "SAST, dependency check, and vulnerability scanning",
            icon: IconId("shield"),
        },
        PipelineStage {
            name: "Build",
            status: StageStatus::Completed,
            duration: "3m 45s",
            description: "Docker image build and push to Harbor registry",
            icon: IconId("package"),
        },
        PipelineStage {
            name: "Test",
            status: StageStatus::Completed,
            duration: "5m 30s",
            description: "Unit tests, integration tests, and code coverage",
            icon: IconId("check-circle"),
        },
        PipelineStage {
            name: "Deploy Staging",
            status: StageStatus::Running,
            duration: "1m 20s",
            description: "Canary deployment to staging environment",
            icon: IconId("rocket"),
        },
        PipelineStage {
            name: "E2E Tests",
            status: StageStatus::Pending,
            duration: "—",
            description: "End-to-end testing in staging environment",
            icon: IconId("settings"),
        },
        PipelineStage {
            name: "Deploy Production",
            status: StageStatus::Pending,
            duration: "—",
            description: "Production deployment with blue-green strategy",
            icon: IconId("rocket"),
        },
    ]
}

pub(super) fn content() -> CicdContent {
    CicdContent {
        hero: Hero {
            title: "CI/CD Pipeline",
            subtitle: "GitOps-driven continuous integration and deployment with automated \
                       security scanning, testing, and progressive delivery strategies for AI \
                       applications.",
        },
        stats: vec![
            Stat { name: "Deploy Frequency", value: "15x/day", icon: IconId("rocket") },
            Stat { name: "Lead Time", value: "< 30min", icon: IconId("clock") },
            Stat { name: "MTTR", value: "< 5min", icon: IconId("refresh-cw") },
            Stat { name: "Success Rate", value: "99.2%", icon: IconId("check-circle") },
        ],
        pipeline_title: "Live Pipeline Execution",
        pipeline_subtitle: "Real-time view of the current deployment pipeline for \
                            document-intelligence service",
        stages: stages(),
        strategies: Section {
            title: "Deployment Strategies",
            subtitle: "Advanced deployment patterns for zero-downtime releases and risk mitigation",
            cards: vec![
                strategy(
                    "refresh-cw",
                    "Blue-Green Deployment",
                    "Zero-downtime deployments with instant rollback capability",
                    &[
                        "Instant rollback on failure",
                        "Zero downtime deployment",
                        "Full environment validation",
                        "Traffic switching automation",
                    ],
                ),
                strategy(
                    "git-branch",
                    "Canary Releases",
                    "Gradual traffic shifting with automated monitoring",
                    &[
                        "5% → 25% → 50% → 100% traffic",
                        "Automated error threshold monitoring",
                        "Performance metrics validation",
                        "Auto-rollback on anomalies",
                    ],
                ),
                strategy(
                    "settings",
                    "Rolling Updates",
                    "Progressive pod replacement with health checks",
                    &[
                        "Kubernetes native rolling updates",
                        "Readiness and liveness probes",
                        "Resource availability checks",
                        "Graceful pod termination",
                    ],
                ),
            ],
        },
        gitops_title: "GitOps Workflow",
        gitops_subtitle: "Declarative deployments with Git as the single source of truth",
        gitops_steps: vec![
            GitOpsStep {
                step: 1,
                title: "Code Commit",
                description: "Developer pushes code changes to GitLab repository with security scanning",
                icon: IconId("git-branch"),
            },
            GitOpsStep {
                step: 2,
                title: "CI Pipeline",
                description: "Automated build, test, security scan, and container image creation",
                icon: IconId("settings"),
            },
            GitOpsStep {
                step: 3,
                title: "GitOps Sync",
                description: "ArgoCD detects configuration changes and syncs to Kubernetes cluster",
                icon: IconId("refresh-cw"),
            },
            GitOpsStep {
                step: 4,
                title: "Deployment",
                description: "Progressive rollout with monitoring and automated rollback on failures",
                icon: IconId("rocket"),
            },
        ],
        pipeline_settings: vec![
            Setting { label: "Trigger", value: "Git Push", color: ColorTag("text-blue-400") },
            Setting { label: "Security Scan", value: "SAST + DAST", color: ColorTag("text-green-400") },
            Setting { label: "Test Coverage", value: "> 80%", color: ColorTag("text-green-400") },
            Setting { label: "Registry", value: "Harbor", color: ColorTag("text-purple-400") },
            Setting { label: "Deployment", value: "ArgoCD", color: ColorTag("text-yellow-400") },
            Setting { label: "Rollback Time", value: "< 30s", color: ColorTag("text-red-400") },
        ],
        quality_gates: vec![
            "Zero critical security vulnerabilities",
            "Test coverage > 80%",
            "Performance regression < 10%",
            "All health checks passing",
        ],
    }
}
