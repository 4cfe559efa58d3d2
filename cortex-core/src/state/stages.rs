//! Expand/collapse state for the CI/CD pipeline stage list.

use crate::catalog::{PipelineStage, StageStatus};

/// Pipeline stages with at most one expanded.
#[derive(Debug, Clone)]
pub struct StageList {
    stages: Vec<PipelineStage>,
    expanded: Option<usize>,
}

impl StageList {
    pub fn new(stages: Vec<PipelineStage>) -> Self {
        Self {
            stages,
            expanded: None,
        }
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Expand `index`, collapsing any other; collapse it if already expanded.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.stages.len() {
            tracing::trace!(index, "toggle on out-of-range stage");
            return;
        }
        if self.expanded == Some(index) {
            self.expanded = None;
        } else {
            tracing::debug!(stage = self.stages[index].name, "stage expanded");
            self.expanded = Some(index);
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    pub fn expanded(&self) -> Option<&PipelineStage> {
        self.expanded.map(|i| &self.stages[i])
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Roll-up status: any failure wins, then any running stage, then
    /// all-completed; anything else is still pending.
    pub fn overall_status(&self) -> StageStatus {
        let any = |s: StageStatus| self.stages.iter().any(|st| st.status == s);
        if any(StageStatus::Failed) {
            StageStatus::Failed
        } else if any(StageStatus::Running) {
            StageStatus::Running
        } else if !self.stages.is_empty()
            && self.stages.iter().all(|st| st.status == StageStatus::Completed)
        {
            StageStatus::Completed
        } else {
            StageStatus::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconId;

    fn stage(name: &'static str, status: StageStatus) -> PipelineStage {
        PipelineStage {
            name,
            status,
            duration: "1m",
            description: "",
            icon: IconId("code"),
        }
    }

    fn list() -> StageList {
        StageList::new(vec![
            stage("Build", StageStatus::Completed),
            stage("Test", StageStatus::Running),
            stage("Deploy", StageStatus::Pending),
        ])
    }

    #[test]
    fn toggle_twice_collapses() {
        let mut l = list();
        l.toggle(1);
        assert_eq!(l.expanded().map(|s| s.name), Some("Test"));
        l.toggle(1);
        assert!(l.expanded().is_none());
    }

    #[test]
    fn toggle_other_replaces() {
        let mut l = list();
        l.toggle(0);
        l.toggle(2);
        assert_eq!(l.expanded_index(), Some(2));
        assert!(!l.is_expanded(0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut l = list();
        l.toggle(0);
        l.toggle(3);
        l.toggle(usize::MAX);
        assert_eq!(l.expanded_index(), Some(0));
    }

    #[test]
    fn overall_status_rollup() {
        assert_eq!(list().overall_status(), StageStatus::Running);

        let done = StageList::new(vec![
            stage("Build", StageStatus::Completed),
            stage("Test", StageStatus::Completed),
        ]);
        assert_eq!(done.overall_status(), StageStatus::Completed);

        let broken = StageList::new(vec![
            stage("Build", StageStatus::Running),
            stage("Test", StageStatus::Failed),
        ]);
        assert_eq!(broken.overall_status(), StageStatus::Failed);

        let waiting = StageList::new(vec![
            stage("Build", StageStatus::Completed),
            stage("Test", StageStatus::Pending),
        ]);
        assert_eq!(waiting.overall_status(), StageStatus::Pending);
        assert_eq!(StageList::new(Vec::new()).overall_status(), StageStatus::Pending);
    }
}
