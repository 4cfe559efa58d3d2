use super::{
    ArchitectureContent, Card, ColorTag, DiagramNode, Hero, IconId, LegendEntry, PageLink,
    Position, Section,
};
use crate::page::Page;

fn layer(
    title: &'static str,
    description: &'static str,
    components: &[&'static str],
    color: &'static str,
) -> Card {
    Card {
        title,
        description,
        icon: None,
        color: Some(ColorTag(color)),
        items: components.to_vec(),
    }
}

/// The eight components of the interactive diagram.
pub(super) fn nodes() -> Vec<DiagramNode> {
    vec![
        DiagramNode {
            id: "ingress",
            title: "Ingress Load Balancer",
            description: "WAF, DDoS protection, SSL termination with MetalLB",
            details: "Nginx Ingress Controller with SSL termination, rate limiting, and DDoS \
                      protection. MetalLB provides LoadBalancer services in on-premise environment.",
            position: Position { x: 5, y: 5 },
            color: ColorTag("bg-green-500"),
            icon: IconId("network"),
        },
        DiagramNode {
            id: "control-plane",
            title: "K8s Control Plane",
            description: "3-node HA cluster with etcd",
            details: "High availability control plane with 3 master nodes, distributed etcd \
                      cluster, and automatic failover capabilities.",
            position: Position { x: 5, y: 25 },
            color: ColorTag("bg-blue-500"),
            icon: IconId("server"),
        },
        DiagramNode {
            id: "gpu-nodes",
            title: "GPU Worker Nodes",
            description: "NVIDIA GPU nodes with Triton Server",
            details: "Dedicated GPU nodes with NVIDIA V100/A100 GPUs, Triton Inference Server, \
                      and GPU operator for resource management.",
            position: Position { x: 55, y: 25 },
            color: ColorTag("bg-purple-500"),
            icon: IconId("cpu"),
        },
        DiagramNode {
            id: "cpu-nodes",
            title: "CPU Worker Nodes",
            description: "Application workloads and services",
            details: "CPU-optimized worker nodes running application services, databases, and \
                      support infrastructure.",
            position: Position { x: 5, y: 45 },
            color: ColorTag("bg-blue-400"),
            icon: IconId("server"),
        },
        DiagramNode {
            id: "security",
            title: "Security Stack",
            description: "Vault, OPA, Falco, mTLS",
            details: "HashiCorp Vault for secrets, OPA Gatekeeper for policies, Falco for runtime \
                      security, and Istio service mesh for mTLS.",
            position: Position { x: 55, y: 45 },
            color: ColorTag("bg-red-500"),
            icon: IconId("shield"),
        },
        DiagramNode {
            id: "monitoring",
            title: "Monitoring Stack",
            description: "Prometheus, Grafana, Jaeger",
            details: "Prometheus metrics collection, Grafana dashboards, Jaeger distributed \
                      tracing, and AlertManager for notifications.",
            position: Position { x: 5, y: 65 },
            color: ColorTag("bg-yellow-500"),
            icon: IconId("monitor"),
        },
        DiagramNode {
            id: "cicd",
            title: "CI/CD Pipeline",
            description: "GitLab CI, ArgoCD, Harbor",
            details: "GitLab CI/CD pipelines, ArgoCD for GitOps deployments, Harbor container \
                      registry with vulnerability scanning.",
            position: Position { x: 55, y: 65 },
            color: ColorTag("bg-indigo-500"),
            icon: IconId("git-branch"),
        },
        DiagramNode {
            id: "storage",
            title: "Persistent Storage",
            description: "Ceph, Longhorn, NFS",
            details: "Distributed storage with Ceph/Longhorn, NFS for shared storage, automated \
                      backups with Velero.",
            position: Position { x: 30, y: 85 },
            color: ColorTag("bg-green-600"),
            icon: IconId("database"),
        },
    ]
}

pub(super) fn content() -> ArchitectureContent {
    ArchitectureContent {
        hero: Hero {
            title: "System Architecture",
            subtitle: "Interactive overview of the Cortex AI Platform infrastructure",
        },
        diagram_title: "Interactive System Architecture",
        badges: vec!["99.9% Uptime", "8 GPU Nodes", "2.5K req/s"],
        nodes: nodes(),
        legend: vec![
            LegendEntry { label: "Control Traffic", color: ColorTag("bg-blue-500") },
            LegendEntry { label: "Service Mesh", color: ColorTag("bg-green-500") },
            LegendEntry { label: "Storage Access", color: ColorTag("bg-purple-500") },
        ],
        layers: Section {
            title: "Architecture Layers",
            subtitle: "Detailed breakdown of each infrastructure layer",
            cards: vec![
                layer(
                    "Network & Security Layer",
                    "External access control, firewall protection, and load balancing",
                    &["DMZ Zone", "WAF/Proxy", "API Gateway", "Firewall", "Load Balancer"],
                    "border-l-green-500",
                ),
                layer(
                    "Kubernetes Control Plane",
                    "High availability cluster management and orchestration",
                    &["3x Master Nodes", "etcd Cluster", "API Server", "Scheduler", "Controller Manager"],
                    "border-l-blue-500",
                ),
                layer(
                    "Compute Layer",
                    "Specialized worker nodes for different workload types",
                    &["GPU Worker Nodes", "CPU Worker Nodes", "GPU Operators", "Node Affinity"],
                    "border-l-purple-500",
                ),
                layer(
                    "Application Layer",
                    "AI services, APIs, and support applications",
                    &["Document Intelligence", "LLM Services", "Court APIs", "Web Frontend", "Cache Layer"],
                    "border-l-indigo-500",
                ),
                layer(
                    "Infrastructure Services",
                    "Monitoring, logging, security, and storage services",
                    &["Prometheus/Grafana", "ELK Stack", "Vault/OPA", "Ceph/Longhorn", "Backup Services"],
                    "border-l-yellow-500",
                ),
            ],
        },
        explore: vec![
            PageLink {
                label: "Security",
                description: "Zero-trust security model",
                page: Page::Security,
            },
            PageLink {
                label: "CI/CD",
                description: "GitOps deployment pipeline",
                page: Page::CiCd,
            },
            PageLink {
                label: "Monitoring",
                description: "Observability stack",
                page: Page::Monitoring,
            },
        ],
    }
}
