use super::{CallToAction, Card, CodeExample, ExampleKey, Hero, IconId, ImplementationContent, Section};

const DEPLOYMENT_YAML: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: document-intelligence-agent
  namespace: ai-services
  labels:
    app: document-intelligence-agent
    version: v1.0.0
spec:
  replicas: 3
  strategy:
    type: RollingUpdate
    rollingUpdate:
      maxUnavailable: 1
      maxSurge: 1
  selector:
    matchLabels:
      app: document-intelligence-agent
  template:
    metadata:
      labels:
        app: document-intelligence-agent
        version: v1.0.0
      annotations:
        prometheus.io/scrape: "true"
        prometheus.io/port: "8080"
    spec:
      serviceAccountName: document-intelligence-sa
      securityContext:
        runAsNonRoot: true
        runAsUser: 1000
        fsGroup: 2000
      containers:
      - name: document-agent
        image: harbor.cortex.local/ai-services/document-intelligence:v1.0.0
        ports:
        - containerPort: 8080
          name: http
        env:
        - name: MODEL_ENDPOINT
          value: "http://llm-inference-service:8000/v1/completions"
        - name: LOG_LEVEL
          value: "INFO"
        resources:
          requests:
            memory: "512Mi"
            cpu: "500m"
          limits:
            memory: "2Gi"
            cpu: "2000m"
        livenessProbe:
          httpGet:
            path: /health
            port: 8080
          initialDelaySeconds: 30
          periodSeconds: 10"#;

const GITLAB_CI_YAML: &str = r#"stages:
  - security-scan
  - build
  - test
  - deploy-staging
  - deploy-production

variables:
  DOCKER_DRIVER: overlay2
  HARBOR_REGISTRY: "harbor.cortex.local"
  IMAGE_NAME: "${HARBOR_REGISTRY}/ai-services/document-intelligence"

security-scan:
  stage: security-scan
  image: returntocorp/semgrep:latest
  script:
    - semgrep --config=auto --json --output=semgrep-report.json .
  artifacts:
    reports:
      sast: semgrep-report.json

build:
  stage: build
  image: docker:20.10.16
  services:
    - docker:20.10.16-dind
  script:
    - docker build -t $IMAGE_NAME:$CI_COMMIT_SHA .
    - docker push $IMAGE_NAME:$CI_COMMIT_SHA
  rules:
    - if: $CI_COMMIT_BRANCH == "main"

deploy-production:
  stage: deploy-production
  image: bitnami/kubectl:latest
  script:
    - kubectl config use-context production-cluster
    - envsubst < k8s/deployment.yaml | kubectl apply -f -
    - kubectl rollout status deployment/document-intelligence-agent
  rules:
    - if: $CI_COMMIT_BRANCH == "main"
  when: manual"#;

const SECURITY_YAML: &str = r#"apiVersion: v1
kind: ServiceAccount
metadata:
  name: document-intelligence-sa
  namespace: ai-services
---
apiVersion: rbac.authorization.k8s.io/v1
kind: Role
metadata:
  name: document-intelligence-role
  namespace: ai-services
rules:
- apiGroups: [""]
  resources: ["secrets", "configmaps"]
  verbs: ["get", "list"]
- apiGroups: [""]
  resources: ["pods"]
  verbs: ["get", "list", "watch"]
---
apiVersion: networking.k8s.io/v1
kind: NetworkPolicy
metadata:
  name: document-intelligence-netpol
  namespace: ai-services
spec:
  podSelector:
    matchLabels:
      app: document-intelligence-agent
  policyTypes:
  - Ingress
  - Egress
  ingress:
  - from:
    - namespaceSelector:
        matchLabels:
          name: ingress-nginx
    ports:
    - protocol: TCP
      port: 8080
  egress:
  - to:
    - namespaceSelector:
        matchLabels:
          name: ai-inference
    ports:
    - protocol: TCP
      port: 8000"#;

const PROMETHEUS_YAML: &str = r#"global:
  scrape_interval: 15s
  evaluation_interval: 15s

rule_files:
  - "alert_rules.yml"

scrape_configs:
  - job_name: 'kubernetes-pods'
    kubernetes_sd_configs:
      - role: pod
    relabel_configs:
      - source_labels: [__meta_kubernetes_pod_annotation_prometheus_io_scrape]
        action: keep
        regex: true

  - job_name: 'gpu-metrics'
    static_configs:
      - targets: ['dcgm-exporter:9400']
    scrape_interval: 5s

  - job_name: 'document-intelligence'
    kubernetes_sd_configs:
      - role: endpoints
        namespaces:
          names:
          - ai-services
    relabel_configs:
      - source_labels: [__meta_kubernetes_service_name]
        action: keep
        regex: document-intelligence-service

alerting:
  alertmanagers:
    - static_configs:
        - targets:
          - alertmanager:9093"#;

fn feature(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    items: &[&'static str],
) -> Card {
    Card {
        title,
        description,
        icon: Some(IconId(icon)),
        color: None,
        items: items.to_vec(),
    }
}

pub(super) fn content() -> ImplementationContent {
    ImplementationContent {
        hero: Hero {
            title: "Implementation Details",
            subtitle: "Production-ready Kubernetes manifests, CI/CD pipelines, security \
                       policies, and monitoring configurations for the Cortex AI Platform.",
        },
        examples: vec![
            CodeExample {
                key: ExampleKey::Deployment,
                title: "Document Intelligence Deployment",
                description: "Kubernetes deployment with GPU scheduling, security context, and \
                              health checks",
                icon: IconId("file-text"),
                language: "yaml",
                code: DEPLOYMENT_YAML,
            },
            CodeExample {
                key: ExampleKey::Cicd,
                title: "GitLab CI/CD Pipeline",
                description: "Complete CI/CD pipeline with security scanning, testing, and deployment",
                icon: IconId("git-branch"),
                language: "yaml",
                code: GITLAB_CI_YAML,
            },
            CodeExample {
                key: ExampleKey::Security,
                title: "Security Policies",
                description: "RBAC, Network Policies, and OPA Gatekeeper rules for zero-trust security",
                icon: IconId("shield"),
                language: "yaml",
                code: SECURITY_YAML,
            },
            CodeExample {
                key: ExampleKey::Monitoring,
                title: "Prometheus Configuration",
                description: "GPU metrics, application monitoring, and alerting rules",
                icon: IconId("monitor"),
                language: "yaml",
                code: PROMETHEUS_YAML,
            },
        ],
        features: Section {
            title: "Key Implementation Features",
            subtitle: "Production-ready configurations with enterprise-grade security and reliability",
            cards: vec![
                feature(
                    "shield",
                    "Zero-Trust Security",
                    "Network policies, RBAC, service mesh with mTLS",
                    &["Network micro-segmentation", "Pod security contexts", "Secrets management", "Runtime security"],
                ),
                feature(
                    "git-branch",
                    "GitOps Deployment",
                    "Automated CI/CD with ArgoCD and security scanning",
                    &["Automated security scans", "Canary deployments", "Rollback mechanisms", "Infrastructure as Code"],
                ),
                feature(
                    "database",
                    "Persistent Storage",
                    "Distributed storage with backup and disaster recovery",
                    &["High availability storage", "Automated backups", "Disaster recovery", "Data encryption"],
                ),
                feature(
                    "monitor",
                    "Observability Stack",
                    "Comprehensive monitoring, logging, and alerting",
                    &["GPU metrics monitoring", "Distributed tracing", "Log aggregation", "Custom alerting"],
                ),
                feature(
                    "settings",
                    "Resource Management",
                    "Efficient resource allocation and autoscaling",
                    &["GPU resource sharing", "Horizontal pod autoscaling", "Resource quotas", "Node affinity"],
                ),
                feature(
                    "file-text",
                    "Configuration Management",
                    "Centralized configuration with validation",
                    &["ConfigMap management", "Secret rotation", "Policy enforcement", "Compliance auditing"],
                ),
            ],
        },
        download: CallToAction {
            title: "Get Complete Implementation Files",
            subtitle: "Download all Kubernetes manifests, CI/CD pipelines, security policies, \
                       and monitoring configurations ready for production deployment.",
            links: Vec::new(),
        },
        download_label: "Download Complete Package",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippets_keep_shell_variables() {
        assert!(GITLAB_CI_YAML.contains("${HARBOR_REGISTRY}"));
        assert!(GITLAB_CI_YAML.contains("$IMAGE_NAME:$CI_COMMIT_SHA"));
    }

    #[test]
    fn examples_follow_key_order() {
        let keys: Vec<ExampleKey> = content().examples.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                ExampleKey::Deployment,
                ExampleKey::Cicd,
                ExampleKey::Security,
                ExampleKey::Monitoring
            ]
        );
    }
}
