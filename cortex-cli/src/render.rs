//! Plain-text rendering of a page for `cortex show`.

use std::fmt::Write;

use cortex_core::catalog::{CallToAction, Hero, Section, Stat};
use cortex_core::state::StageList;
use cortex_core::{Catalog, Page};

pub fn page(catalog: &Catalog, page: Page) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = match page {
        Page::Home => home(&mut out, catalog),
        Page::Architecture => architecture(&mut out, catalog),
        Page::Security => security(&mut out, catalog),
        Page::CiCd => cicd(&mut out, catalog),
        Page::Monitoring => monitoring(&mut out, catalog),
        Page::Implementation => implementation(&mut out, catalog),
    };
    out
}

fn hero(out: &mut String, hero: &Hero) -> std::fmt::Result {
    writeln!(out, "{}", hero.title)?;
    writeln!(out, "{}", "=".repeat(hero.title.chars().count()))?;
    writeln!(out, "{}", hero.subtitle)?;
    writeln!(out)
}

fn heading(out: &mut String, title: &str, subtitle: &str) -> std::fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    if !subtitle.is_empty() {
        writeln!(out, "{subtitle}")?;
    }
    writeln!(out)
}

fn stats(out: &mut String, stats: &[Stat]) -> std::fmt::Result {
    for stat in stats {
        writeln!(out, "  {:>10}  {}", stat.value, stat.name)?;
    }
    writeln!(out)
}

fn section(out: &mut String, section: &Section) -> std::fmt::Result {
    heading(out, section.title, section.subtitle)?;
    for card in &section.cards {
        writeln!(out, "* {}", card.title)?;
        if !card.description.is_empty() {
            writeln!(out, "  {}", card.description)?;
        }
        for item in &card.items {
            writeln!(out, "    - {item}")?;
        }
    }
    writeln!(out)
}

fn call_to_action(out: &mut String, cta: &CallToAction) -> std::fmt::Result {
    heading(out, cta.title, cta.subtitle)?;
    for link in &cta.links {
        writeln!(out, "  {} ({})", link.label, link.page.href())?;
    }
    writeln!(out)
}

fn home(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let home = &catalog.home;
    hero(out, &home.hero)?;
    for link in &home.primary_links {
        writeln!(out, "  -> {} ({})", link.label, link.page.href())?;
    }
    writeln!(out)?;
    stats(out, &home.stats)?;
    section(out, &home.features)?;
    call_to_action(out, &home.cta)
}

fn architecture(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let arch = &catalog.architecture;
    hero(out, &arch.hero)?;
    heading(out, arch.diagram_title, &arch.badges.join(" | "))?;
    for node in &arch.nodes {
        writeln!(
            out,
            "[{}] {} @ ({}%, {}%)",
            node.id, node.title, node.position.x, node.position.y
        )?;
        writeln!(out, "  {}", node.description)?;
        writeln!(out, "  {}", node.details)?;
    }
    writeln!(out)?;
    section(out, &arch.layers)?;
    for link in &arch.explore {
        writeln!(out, "  -> {}: {} ({})", link.label, link.description, link.page.href())?;
    }
    Ok(())
}

fn security(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let security = &catalog.security;
    hero(out, &security.hero)?;
    stats(out, &security.stats)?;
    section(out, &security.layers)?;
    section(out, &security.controls)?;
    heading(out, security.compliance_title, security.compliance_subtitle)?;
    for framework in &security.compliance {
        writeln!(
            out,
            "  {:<12} {:<12} {}",
            framework.name,
            framework.status.label(),
            framework.description
        )?;
    }
    Ok(())
}

fn cicd(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let cicd = &catalog.cicd;
    hero(out, &cicd.hero)?;
    stats(out, &cicd.stats)?;
    heading(out, cicd.pipeline_title, cicd.pipeline_subtitle)?;
    for (i, stage) in cicd.stages.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<20} {:<10} {}",
            i + 1,
            stage.name,
            stage.status.label(),
            stage.duration
        )?;
        writeln!(out, "     {}", stage.description)?;
    }
    let overall = StageList::new(cicd.stages.clone()).overall_status();
    writeln!(out, "  pipeline status: {}", overall.label())?;
    writeln!(out)?;
    section(out, &cicd.strategies)?;
    heading(out, cicd.gitops_title, cicd.gitops_subtitle)?;
    for step in &cicd.gitops_steps {
        writeln!(out, "  {}. {}: {}", step.step, step.title, step.description)?;
    }
    writeln!(out)?;
    heading(out, "Pipeline Configuration", "")?;
    for setting in &cicd.pipeline_settings {
        writeln!(out, "  {:<24} {}", setting.label, setting.value)?;
    }
    writeln!(out)?;
    heading(out, "Quality Gates", "")?;
    for gate in &cicd.quality_gates {
        writeln!(out, "  [x] {gate}")?;
    }
    Ok(())
}

fn monitoring(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let monitoring = &catalog.monitoring;
    hero(out, &monitoring.hero)?;
    stats(out, &monitoring.stats)?;
    heading(out, monitoring.dashboard_title, monitoring.dashboard_subtitle)?;
    for category in &monitoring.categories {
        writeln!(out, "{}", category.category)?;
        for metric in &category.metrics {
            writeln!(
                out,
                "  {:<22} {:>10}  {}",
                metric.name,
                metric.value,
                match metric.trend {
                    cortex_core::catalog::Trend::Up => "up",
                    cortex_core::catalog::Trend::Down => "down",
                    cortex_core::catalog::Trend::Stable => "stable",
                }
            )?;
        }
    }
    writeln!(out)?;
    section(out, &monitoring.components)?;
    heading(out, "Alert Management", "")?;
    for alert in &monitoring.alerts {
        writeln!(out, "  {:<10} {:>3}  {}", alert.level, alert.count, alert.description)?;
    }
    writeln!(out)?;
    heading(out, "SLA Monitoring", "")?;
    for sla in &monitoring.sla {
        writeln!(
            out,
            "  {:<26} target {:<8} current {:<8} {}",
            sla.metric,
            sla.target,
            sla.current,
            if sla.healthy { "healthy" } else { "breach" }
        )?;
    }
    Ok(())
}

fn implementation(out: &mut String, catalog: &Catalog) -> std::fmt::Result {
    let implementation = &catalog.implementation;
    hero(out, &implementation.hero)?;
    for example in &implementation.examples {
        heading(out, example.title, example.description)?;
        writeln!(out, "```{}", example.language)?;
        writeln!(out, "{}", example.code.trim_end())?;
        writeln!(out, "```")?;
        writeln!(out)?;
    }
    section(out, &implementation.features)?;
    heading(out, implementation.download.title, implementation.download.subtitle)?;
    writeln!(out, "  [{}]", implementation.download_label)
}
