//! The deletion confirmation wizard.
//!
//! An explicit finite-state machine owned by the core service. The UI only
//! renders the current state and dispatches events, which makes the whole
//! confirmation flow unit-testable without a UI harness. The reason-entry
//! state cannot be skipped: the only path into `Processing` is a non-blank
//! reason submitted from `ReasonEntry`.
use causeway_shared::types::{DeletionAnalysis, DeletionResult, DeletionTarget};
use std::sync::Arc;
use uuid::Uuid;

use crate::analyzer::DeletionAnalyzer;
use crate::errors::WizardError;
use crate::executor::DeletionExecutor;

/// The states of the deletion confirmation flow.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    /// Impact analysis has not completed yet.
    Analysis,
    /// The operator reviews the analysis before committing.
    Confirmation { analysis: DeletionAnalysis },
    /// The operator must provide a non-blank deletion reason.
    ReasonEntry { analysis: DeletionAnalysis },
    /// The executor is running; no further events are accepted.
    Processing,
    /// The deletion finished, successfully or not.
    Finished { result: DeletionResult },
    /// The operator abandoned the flow before processing.
    Cancelled,
    /// The analysis failed; deleting blind is not allowed.
    Failed { message: String },
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Analysis => "analysis",
            WizardState::Confirmation { .. } => "confirmation",
            WizardState::ReasonEntry { .. } => "reason_entry",
            WizardState::Processing => "processing",
            WizardState::Finished { .. } => "finished",
            WizardState::Cancelled => "cancelled",
            WizardState::Failed { .. } => "failed",
        }
    }
}

/// Drives one deletion through analysis, confirmation, reason entry, and
/// execution.
pub struct DeletionWizard {
    target: DeletionTarget,
    acting_admin_id: Uuid,
    analyzer: Arc<DeletionAnalyzer>,
    executor: Arc<DeletionExecutor>,
    state: WizardState,
}

impl DeletionWizard {
    pub fn new(
        analyzer: Arc<DeletionAnalyzer>,
        executor: Arc<DeletionExecutor>,
        target: DeletionTarget,
        acting_admin_id: Uuid,
    ) -> Self {
        Self {
            target,
            acting_admin_id,
            analyzer,
            executor,
            state: WizardState::Analysis,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn target(&self) -> DeletionTarget {
        self.target
    }

    /// Runs the impact analysis. On success the wizard moves to
    /// `Confirmation`; an analysis failure terminates the flow in `Failed`
    /// because the operation stays blocked until the impact can be
    /// analyzed.
    pub async fn run_analysis(&mut self) -> Result<&WizardState, WizardError> {
        if !matches!(self.state, WizardState::Analysis) {
            return Err(self.invalid("run_analysis"));
        }
        match self.analyzer.analyze(self.target).await {
            Ok(analysis) => self.state = WizardState::Confirmation { analysis },
            Err(err) => {
                self.state = WizardState::Failed {
                    message: err.to_string(),
                }
            }
        }
        Ok(&self.state)
    }

    /// Acknowledges the analysis and moves on to reason entry.
    pub fn confirm(&mut self) -> Result<&WizardState, WizardError> {
        match std::mem::replace(&mut self.state, WizardState::Analysis) {
            WizardState::Confirmation { analysis } => {
                self.state = WizardState::ReasonEntry { analysis };
                Ok(&self.state)
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(WizardError::InvalidEvent {
                    state,
                    event: "confirm",
                })
            }
        }
    }

    /// Submits the operator's reason and executes the deletion.
    ///
    /// A blank reason is refused and the wizard stays in `ReasonEntry`, so
    /// the flow cannot reach the executor without one.
    pub async fn submit_reason(&mut self, reason: &str) -> Result<&WizardState, WizardError> {
        if !matches!(self.state, WizardState::ReasonEntry { .. }) {
            return Err(self.invalid("submit_reason"));
        }
        if reason.trim().is_empty() {
            return Err(WizardError::BlankReason);
        }

        self.state = WizardState::Processing;
        let result = self
            .executor
            .execute(self.target, self.acting_admin_id, reason)
            .await;
        self.state = WizardState::Finished { result };
        Ok(&self.state)
    }

    /// Abandons the flow. Only allowed before processing starts; once the
    /// executor runs, any store mutation already issued is not rolled back
    /// by cancelling.
    pub fn cancel(&mut self) -> Result<&WizardState, WizardError> {
        match self.state {
            WizardState::Analysis
            | WizardState::Confirmation { .. }
            | WizardState::ReasonEntry { .. } => {
                self.state = WizardState::Cancelled;
                Ok(&self.state)
            }
            _ => Err(self.invalid("cancel")),
        }
    }

    fn invalid(&self, event: &'static str) -> WizardError {
        WizardError::InvalidEvent {
            state: self.state.name(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorize::{AdminGate, GateConfig};
    use crate::testing::{MockAccounts, MockApplications, MockAudit, MockImpact, MockProjects};
    use causeway_repository::{
        AccountsRepository, ApplicationsRepository, AuditRepository, ImpactRepository,
        ProjectsRepository, RawDeletionImpact,
    };
    use causeway_shared::types::{ProjectModeration, ProjectStatus, Role};

    fn project_row(id: Uuid) -> ProjectModeration {
        ProjectModeration {
            id,
            organization_id: Uuid::new_v4(),
            title: "Volunteer portal".to_string(),
            status: ProjectStatus::Open,
            rejection_reason: None,
            can_resubmit: true,
            approved_by: None,
            approved_at: None,
        }
    }

    fn wizard_for(impact: MockImpact, projects: MockProjects) -> (DeletionWizard, Uuid) {
        let admin_id = Uuid::new_v4();
        let accounts = Arc::new(MockAccounts::default().with_role(admin_id, Role::Admin));
        let impact = Arc::new(impact);
        let audit = Arc::new(MockAudit::default());
        let projects = Arc::new(projects);
        let applications = Arc::new(MockApplications::default());

        let gate = Arc::new(AdminGate::new(
            Arc::clone(&accounts) as Arc<dyn AccountsRepository>,
            GateConfig {
                super_admin_id: admin_id,
            },
        ));
        let analyzer = Arc::new(DeletionAnalyzer::new(
            Arc::clone(&impact) as Arc<dyn ImpactRepository>
        ));
        let executor = Arc::new(DeletionExecutor::new(
            gate,
            Arc::clone(&analyzer),
            audit as Arc<dyn AuditRepository>,
            accounts as Arc<dyn AccountsRepository>,
            Arc::clone(&projects) as Arc<dyn ProjectsRepository>,
            applications as Arc<dyn ApplicationsRepository>,
        ));

        let project_id = projects.projects.lock().unwrap().keys().next().copied();
        let target = DeletionTarget::Project(project_id.unwrap_or_else(Uuid::new_v4));
        (
            DeletionWizard::new(analyzer, executor, target, admin_id),
            admin_id,
        )
    }

    #[tokio::test]
    async fn happy_path_walks_every_state_in_order() {
        let project_id = Uuid::new_v4();
        let (mut wizard, _) = wizard_for(
            MockImpact::returning(RawDeletionImpact {
                target_name: "Volunteer portal".to_string(),
                ..Default::default()
            }),
            MockProjects::default().with_project(project_row(project_id)),
        );

        assert_eq!(wizard.state().name(), "analysis");
        assert_eq!(wizard.run_analysis().await.unwrap().name(), "confirmation");
        assert_eq!(wizard.confirm().unwrap().name(), "reason_entry");

        let state = wizard.submit_reason("duplicate listing").await.unwrap();
        let WizardState::Finished { result } = state else {
            panic!("expected finished state, got {}", state.name());
        };
        assert!(result.success);
        assert!(result.audit_id.is_some());
    }

    #[tokio::test]
    async fn reason_entry_cannot_be_skipped() {
        let project_id = Uuid::new_v4();
        let (mut wizard, _) = wizard_for(
            MockImpact::returning(RawDeletionImpact::default()),
            MockProjects::default().with_project(project_row(project_id)),
        );

        // Straight to submit_reason from analysis: refused.
        assert_eq!(
            wizard.submit_reason("reason").await,
            Err(WizardError::InvalidEvent {
                state: "analysis",
                event: "submit_reason"
            })
        );

        wizard.run_analysis().await.unwrap();
        // Straight from confirmation as well: refused.
        assert_eq!(
            wizard.submit_reason("reason").await,
            Err(WizardError::InvalidEvent {
                state: "confirmation",
                event: "submit_reason"
            })
        );
    }

    #[tokio::test]
    async fn blank_reason_keeps_the_wizard_in_reason_entry() {
        let project_id = Uuid::new_v4();
        let (mut wizard, _) = wizard_for(
            MockImpact::returning(RawDeletionImpact::default()),
            MockProjects::default().with_project(project_row(project_id)),
        );

        wizard.run_analysis().await.unwrap();
        wizard.confirm().unwrap();

        assert_eq!(
            wizard.submit_reason("   ").await,
            Err(WizardError::BlankReason)
        );
        assert_eq!(wizard.state().name(), "reason_entry");

        // A real reason still goes through afterwards.
        assert_eq!(
            wizard.submit_reason("spam posting").await.unwrap().name(),
            "finished"
        );
    }

    #[tokio::test]
    async fn failed_analysis_terminates_the_flow() {
        let (mut wizard, _) = wizard_for(
            MockImpact {
                fail: true,
                ..Default::default()
            },
            MockProjects::default(),
        );

        let state = wizard.run_analysis().await.unwrap();
        assert_eq!(state.name(), "failed");

        // Nothing else is accepted afterwards.
        assert!(wizard.confirm().is_err());
        assert!(wizard.submit_reason("reason").await.is_err());
        assert!(wizard.cancel().is_err());
    }

    #[tokio::test]
    async fn cancel_is_allowed_only_before_processing() {
        let project_id = Uuid::new_v4();
        let (mut wizard, _) = wizard_for(
            MockImpact::returning(RawDeletionImpact::default()),
            MockProjects::default().with_project(project_row(project_id)),
        );

        wizard.run_analysis().await.unwrap();
        wizard.confirm().unwrap();
        assert_eq!(wizard.cancel().unwrap().name(), "cancelled");
        assert!(wizard.cancel().is_err());
    }
}
