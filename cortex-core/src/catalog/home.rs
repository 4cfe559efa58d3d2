use super::{CallToAction, Card, Hero, HomeContent, IconId, PageLink, Section, Stat};
use crate::page::Page;

fn feature(icon: &'static str, title: &'static str, description: &'static str) -> Card {
    Card {
        title,
        description,
        icon: Some(IconId(icon)),
        color: None,
        items: Vec::new(),
    }
}

pub(super) fn content() -> HomeContent {
    HomeContent {
        hero: Hero {
            title: "Cortex AI Platform",
            subtitle: "Production-ready DevOps architecture for on-premise AI platform running on \
                       Cisco AI Pods with GPU inference services for legal document processing",
        },
        primary_links: vec![
            PageLink {
                label: "View Architecture",
                description: "Interactive system architecture",
                page: Page::Architecture,
            },
            PageLink {
                label: "Implementation Details",
                description: "Manifests, pipelines, and policies",
                page: Page::Implementation,
            },
        ],
        stats: vec![
            Stat { name: "Uptime SLA", value: "99.9%", icon: IconId("check-circle") },
            Stat { name: "GPU Nodes", value: "8x", icon: IconId("cpu") },
            Stat { name: "Max Inference/sec", value: "10K+", icon: IconId("zap") },
            Stat { name: "Security Compliance", value: "SOC2", icon: IconId("lock") },
        ],
        features: Section {
            title: "Enterprise-Grade Architecture",
            subtitle: "Built for reliability, security, and scalability in production environments",
            cards: vec![
                feature(
                    "server",
                    "High Availability Infrastructure",
                    "3-node Kubernetes control plane with etcd clustering and zero-downtime deployments",
                ),
                feature(
                    "cpu",
                    "GPU Acceleration",
                    "Dedicated NVIDIA GPU nodes with Triton Inference Server for AI workloads",
                ),
                feature(
                    "shield",
                    "Zero-Trust Security",
                    "Service mesh with mutual TLS and network micro-segmentation",
                ),
                feature(
                    "git-branch",
                    "GitOps Deployment",
                    "ArgoCD with canary releases and automated rollback mechanisms",
                ),
                feature(
                    "monitor",
                    "AI-Specific Monitoring",
                    "GPU utilization, model performance, and inference latency tracking",
                ),
                feature(
                    "database",
                    "Enterprise Storage",
                    "Distributed storage with backup and disaster recovery capabilities",
                ),
            ],
        },
        cta: CallToAction {
            title: "Ready to explore the architecture?",
            subtitle: "Dive deep into the technical details, security implementations, and \
                       operational procedures",
            links: vec![
                PageLink {
                    label: "View Full Architecture",
                    description: "",
                    page: Page::Architecture,
                },
                PageLink {
                    label: "See Implementation",
                    description: "",
                    page: Page::Implementation,
                },
            ],
        },
    }
}
