//! Agregados del dashboard derivados de la proyección.
use crosscut_domain::{WorkflowStatus, WorkflowView};
use serde::{Deserialize, Serialize};

/// Conteos globales por estado de workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub total_workflows: usize,
    pub successful_workflows: usize,
    pub failed_workflows: usize,
}

impl SystemMetrics {
    /// Cuenta sobre un conjunto de vistas (una pasada).
    pub fn from_views<'a, I>(views: I) -> Self
        where I: IntoIterator<Item = &'a WorkflowView>
    {
        let mut metrics = SystemMetrics::default();
        for view in views {
            metrics.total_workflows += 1;
            match view.status {
                WorkflowStatus::Completed => metrics.successful_workflows += 1,
                WorkflowStatus::Failed => metrics.failed_workflows += 1,
                WorkflowStatus::Running => {}
            }
        }
        metrics
    }

    /// Workflows que siguen en curso.
    pub fn running_workflows(&self) -> usize {
        self.total_workflows - self.successful_workflows - self.failed_workflows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn view(id: &str, status: WorkflowStatus) -> WorkflowView {
        WorkflowView {
            id: id.to_string(),
            workflow_id: id.to_string(),
            status,
            message: String::new(),
            created_at: Utc::now(),
            product_name: None,
            revision: None,
            document_url: None,
        }
    }

    #[test]
    fn counts_by_status() {
        let views = vec![view("wf1", WorkflowStatus::Completed),
                         view("wf2", WorkflowStatus::Failed),
                         view("wf3", WorkflowStatus::Running),
                         view("wf4", WorkflowStatus::Completed)];
        let m = SystemMetrics::from_views(&views);
        assert_eq!(m.total_workflows, 4);
        assert_eq!(m.successful_workflows, 2);
        assert_eq!(m.failed_workflows, 1);
        assert_eq!(m.running_workflows(), 1);
    }

    #[test]
    fn empty_views_count_zero() {
        let m = SystemMetrics::from_views(std::iter::empty::<&WorkflowView>());
        assert_eq!(m, SystemMetrics::default());
    }
}
