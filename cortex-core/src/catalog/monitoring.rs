use super::{
    AlertSeverity, Card, ColorTag, Hero, IconId, Metric, MetricCategory, MetricCategoryKey,
    MonitoringContent, Section, SlaMetric, Stat, Trend,
};

fn metric(name: &'static str, value: &'static str, trend: Trend, color: &'static str) -> Metric {
    Metric {
        name,
        value,
        trend,
        color: ColorTag(color),
    }
}

fn component(
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    color: &'static str,
    features: &[&'static str],
) -> Card {
    Card {
        title: name,
        description,
        icon: Some(IconId(icon)),
        color: Some(ColorTag(color)),
        items: features.to_vec(),
    }
}

pub(super) fn content() -> MonitoringContent {
    MonitoringContent {
        hero: Hero {
            title: "Observability Stack",
            subtitle: "Comprehensive monitoring, logging, and alerting for AI infrastructure \
                       with specialized GPU metrics and model performance tracking.",
        },
        stats: vec![
            Stat { name: "Metrics Collected", value: "50K+", icon: IconId("bar-chart") },
            Stat { name: "Log Events/day", value: "10M", icon: IconId("database") },
            Stat { name: "Alert Rules", value: "200+", icon: IconId("alert-circle") },
            Stat { name: "Uptime", value: "99.9%", icon: IconId("trending-up") },
        ],
        dashboard_title: "Real-time Monitoring Dashboard",
        dashboard_subtitle: "Live metrics from production infrastructure and AI workloads",
        categories: vec![
            MetricCategory {
                key: MetricCategoryKey::Infrastructure,
                category: "Infrastructure",
                icon: IconId("monitor"),
                metrics: vec![
                    metric("CPU Utilization", "72%", Trend::Stable, "text-green-600"),
                    metric("Memory Usage", "68%", Trend::Down, "text-blue-600"),
                    metric("Network I/O", "1.2 GB/s", Trend::Up, "text-purple-600"),
                    metric("Disk IOPS", "15K", Trend::Stable, "text-yellow-600"),
                ],
            },
            MetricCategory {
                key: MetricCategoryKey::GpuResources,
                category: "GPU Resources",
                icon: IconId("cpu"),
                metrics: vec![
                    metric("GPU Utilization", "89%", Trend::Up, "text-red-600"),
                    metric("GPU Memory", "24 GB", Trend::Stable, "text-indigo-600"),
                    metric("GPU Temperature", "72°C", Trend::Stable, "text-orange-600"),
                    metric("Power Usage", "250W", Trend::Up, "text-pink-600"),
                ],
            },
            MetricCategory {
                key: MetricCategoryKey::Applications,
                category: "Applications",
                icon: IconId("activity"),
                metrics: vec![
                    metric("Request Rate", "2.5K/s", Trend::Up, "text-green-600"),
                    metric("Response Time", "95ms", Trend::Down, "text-blue-600"),
                    metric("Error Rate", "0.02%", Trend::Stable, "text-purple-600"),
                    metric("Active Users", "1,234", Trend::Up, "text-yellow-600"),
                ],
            },
        ],
        components: Section {
            title: "Monitoring Stack Components",
            subtitle: "Enterprise-grade observability tools for comprehensive system insights",
            cards: vec![
                component(
                    "bar-chart",
                    "Prometheus",
                    "Time-series metrics collection and storage",
                    "bg-orange-500",
                    &["Multi-dimensional metrics", "PromQL query language", "Service discovery", "Alert rules"],
                ),
                component(
                    "pie-chart",
                    "Grafana",
                    "Visualization and dashboards",
                    "bg-blue-500",
                    &["Interactive dashboards", "Multiple data sources", "Alert notifications", "Custom panels"],
                ),
                component(
                    "network",
                    "Jaeger",
                    "Distributed tracing for microservices",
                    "bg-purple-500",
                    &["Request flow tracking", "Performance bottlenecks", "Service dependencies", "Latency analysis"],
                ),
                component(
                    "database",
                    "Elasticsearch",
                    "Log storage and search",
                    "bg-yellow-500",
                    &["Full-text search", "Log aggregation", "Index management", "Real-time analysis"],
                ),
                component(
                    "activity",
                    "Fluentd",
                    "Log collection and forwarding",
                    "bg-green-500",
                    &["Multi-format parsing", "Data transformation", "Reliable delivery", "Plugin ecosystem"],
                ),
                component(
                    "cpu",
                    "DCGM Exporter",
                    "GPU metrics collection",
                    "bg-red-500",
                    &["GPU utilization", "Memory usage", "Temperature monitoring", "Power consumption"],
                ),
            ],
        },
        alerts: vec![
            AlertSeverity {
                level: "Critical",
                count: 2,
                color: ColorTag("bg-red-500"),
                description: "GPU temperature threshold exceeded",
            },
            AlertSeverity {
                level: "Warning",
                count: 8,
                color: ColorTag("bg-yellow-500"),
                description: "Memory usage above 80%",
            },
            AlertSeverity {
                level: "Info",
                count: 15,
                color: ColorTag("bg-blue-500"),
                description: "Deployment completed successfully",
            },
        ],
        sla: vec![
            SlaMetric { metric: "Uptime", target: "99.9%", current: "99.95%", healthy: true },
            SlaMetric { metric: "Response Time", target: "< 2s", current: "1.2s", healthy: true },
            SlaMetric { metric: "Error Rate", target: "< 0.1%", current: "0.02%", healthy: true },
            SlaMetric { metric: "GPU Availability", target: "95%", current: "97%", healthy: true },
        ],
    }
}
