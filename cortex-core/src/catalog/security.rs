use super::{
    Card, ColorTag, ComplianceFramework, ComplianceStatus, Hero, IconId, Section, SecurityContent,
    Stat,
};

fn card(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    color: Option<&'static str>,
    items: &[&'static str],
) -> Card {
    Card {
        title,
        description,
        icon: Some(IconId(icon)),
        color: color.map(ColorTag),
        items: items.to_vec(),
    }
}

pub(super) fn content() -> SecurityContent {
    SecurityContent {
        hero: Hero {
            title: "Security Architecture",
            subtitle: "Zero-trust security model with defense-in-depth strategy, ensuring \
                       comprehensive protection for sensitive legal data and AI inference services.",
        },
        stats: vec![
            Stat { name: "Security Policies", value: "150+", icon: IconId("file-text") },
            Stat { name: "Access Controls", value: "RBAC", icon: IconId("users") },
            Stat { name: "Encryption", value: "AES-256", icon: IconId("lock") },
            Stat { name: "Threat Detection", value: "24/7", icon: IconId("eye") },
        ],
        layers: Section {
            title: "Defense in Depth",
            subtitle: "Multi-layered security approach protecting all aspects of the infrastructure",
            cards: vec![
                card(
                    "network",
                    "Network Security",
                    "Zero-trust network architecture with micro-segmentation",
                    Some("bg-red-500"),
                    &[
                        "Kubernetes Network Policies",
                        "Istio Service Mesh with mTLS",
                        "WAF and DDoS protection",
                        "Firewall zone separation",
                    ],
                ),
                card(
                    "users",
                    "Identity & Access",
                    "Role-based access control and identity management",
                    Some("bg-blue-500"),
                    &[
                        "Active Directory integration",
                        "Kubernetes RBAC",
                        "Service account management",
                        "Multi-factor authentication",
                    ],
                ),
                card(
                    "database",
                    "Data Protection",
                    "Encryption at rest and in transit",
                    Some("bg-green-500"),
                    &[
                        "AES-256 encryption at rest",
                        "TLS 1.3 for data in transit",
                        "Secrets management with Vault",
                        "Certificate lifecycle management",
                    ],
                ),
                card(
                    "eye",
                    "Runtime Security",
                    "Real-time threat detection and prevention",
                    Some("bg-purple-500"),
                    &[
                        "Falco runtime monitoring",
                        "OPA Gatekeeper policies",
                        "Container image scanning",
                        "Behavioral anomaly detection",
                    ],
                ),
            ],
        },
        controls: Section {
            title: "Security Controls",
            subtitle: "Comprehensive security controls across all infrastructure components",
            cards: vec![
                card(
                    "key",
                    "Access Controls",
                    "",
                    None,
                    &[
                        "Role-Based Access Control (RBAC)",
                        "Service Account Management",
                        "Pod Security Standards",
                        "Network Policy Enforcement",
                        "API Server Authentication",
                    ],
                ),
                card(
                    "lock",
                    "Data Security",
                    "",
                    None,
                    &[
                        "Encryption at Rest (AES-256)",
                        "Encryption in Transit (TLS 1.3)",
                        "Secret Management (Vault)",
                        "Certificate Rotation",
                        "Key Management Service",
                    ],
                ),
                card(
                    "alert-triangle",
                    "Monitoring & Alerting",
                    "",
                    None,
                    &[
                        "Runtime Security (Falco)",
                        "Audit Log Analysis",
                        "Anomaly Detection",
                        "Security Event Correlation",
                        "Incident Response Automation",
                    ],
                ),
            ],
        },
        compliance_title: "Compliance & Auditing",
        compliance_subtitle: "Meeting enterprise compliance requirements with comprehensive audit trails",
        compliance: vec![
            ComplianceFramework {
                name: "SOC 2 Type II",
                status: ComplianceStatus::Compliant,
                description: "Security controls audit",
            },
            ComplianceFramework {
                name: "ISO 27001",
                status: ComplianceStatus::InProgress,
                description: "Information security management",
            },
            ComplianceFramework {
                name: "GDPR",
                status: ComplianceStatus::Compliant,
                description: "Data protection regulation",
            },
            ComplianceFramework {
                name: "HIPAA",
                status: ComplianceStatus::Ready,
                description: "Healthcare data protection",
            },
        ],
    }
}
