//! Registration wizard domain logic.
//!
//! This module owns the multi-step account creation flow: choosing how to
//! register, importing a partial profile from an identity provider, walking
//! the fixed sequence of field steps, and handing a normalized record to the
//! account-creation collaborator. The UI only renders `WizardSnapshot` and
//! forwards user intents.
//!
//! ## State Machine
//!
//! - `Choice` - the user picks an origin (manual, LinkedIn, Instagram)
//! - `Form[i]` - the user edits step `i` of `STEP_COUNT`
//!
//! ## Business Rules
//!
//! - A step cannot be left forward while its field is blank after trimming
//! - Birth date and phone are masked on every edit, other fields are stored as typed
//! - Provider imports prefill only the fields the provider returned
//! - Exactly one import per provider selection, exactly one submission per
//!   completed last step
//! - While an import is pending every navigation intent is rejected
//! - A response for an abandoned (reset) flow is ignored

use anyhow::Result;
use log::{debug, info, warn};
use shared::{ProviderProfile, RegistrationField, RegistrationOrigin, RegistrationRecord, WizardMode};

use crate::backend::domain::input_formatting::{apply_formatting, normalize_record};
use crate::backend::domain::profile_provider::ProfileProvider;
use crate::backend::domain::registration_steps::{first_incomplete_step, WizardStep, REGISTRATION_STEPS, STEP_COUNT};

/// Errors surfaced by the registration flow
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Preencha esta informacao para continuar.")]
    EmptyField(RegistrationField),
    #[error("Nao foi possivel conectar. Tente novamente.")]
    ImportFailed { origin: RegistrationOrigin, reason: String },
    #[error("Nao foi possivel concluir o cadastro. Tente novamente.")]
    SubmissionFailed { reason: String },
    #[error("Aguarde a solicitacao em andamento terminar.")]
    Busy,
    #[error("O metodo de cadastro ja foi escolhido.")]
    NotChoosingOrigin,
    #[error("Nenhuma etapa do cadastro esta aberta.")]
    NotEditing,
    #[error("Cadastro manual nao permite trocar de metodo.")]
    ChangeMethodUnavailable,
}

impl RegistrationError {
    /// Errors that belong in the user-visible message slot
    fn is_user_facing(&self) -> bool {
        matches!(
            self,
            RegistrationError::EmptyField(_)
                | RegistrationError::ImportFailed { .. }
                | RegistrationError::SubmissionFailed { .. }
        )
    }
}

/// Account-creation collaborator invoked when the last step is confirmed
pub trait RegistrationGateway {
    fn submit(&mut self, record: &RegistrationRecord, origin: RegistrationOrigin) -> Result<()>;
}

/// Handle for a pending provider import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTicket {
    pub origin: RegistrationOrigin,
    generation: u64,
}

/// Result of a successful `advance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step index
    Moved { step: usize },
    /// Last step submitted; carries the normalized record that was accepted
    Completed(RegistrationRecord),
}

/// Read-only view of the wizard for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSnapshot {
    pub mode: WizardMode,
    pub current_step: usize,
    pub step_count: usize,
    pub step: WizardStep,
    pub record: RegistrationRecord,
    pub origin: RegistrationOrigin,
    pub error_message: Option<String>,
    pub is_busy: bool,
    pub is_last_step: bool,
    pub can_change_method: bool,
    pub banner: Option<&'static str>,
    pub progress_label: String,
}

/// Multi-step registration state machine
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    record: RegistrationRecord,
    current_step: usize,
    origin: RegistrationOrigin,
    mode: WizardMode,
    error: Option<RegistrationError>,
    pending_import: Option<ImportTicket>,
    /// Bumped on every reset so late import responses can be recognized
    generation: u64,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn active_step(&self) -> &'static WizardStep {
        &REGISTRATION_STEPS[self.current_step]
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn origin(&self) -> RegistrationOrigin {
        self.origin
    }

    pub fn error(&self) -> Option<&RegistrationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn is_busy(&self) -> bool {
        self.pending_import.is_some()
    }

    /// Origin whose import is in flight, if any
    pub fn pending_origin(&self) -> Option<RegistrationOrigin> {
        self.pending_import.map(|ticket| ticket.origin)
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == STEP_COUNT - 1
    }

    /// "Change method" is offered only for imported registrations
    pub fn can_change_method(&self) -> bool {
        self.mode == WizardMode::Form && self.origin.is_provider()
    }

    /// Notice shown above the form when data was imported
    pub fn banner(&self) -> Option<&'static str> {
        if self.mode != WizardMode::Form {
            return None;
        }
        match self.origin {
            RegistrationOrigin::LinkedIn => Some("Importamos alguns dados do LinkedIn. Revise as informacoes abaixo."),
            RegistrationOrigin::Instagram => Some("Importamos alguns dados do Instagram. Revise as informacoes abaixo."),
            RegistrationOrigin::Manual => None,
        }
    }

    pub fn progress_label(&self) -> String {
        format!("Passo {} de {}", self.current_step + 1, STEP_COUNT)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            mode: self.mode,
            current_step: self.current_step,
            step_count: STEP_COUNT,
            step: *self.active_step(),
            record: self.record.clone(),
            origin: self.origin,
            error_message: self.error_message(),
            is_busy: self.is_busy(),
            is_last_step: self.is_last_step(),
            can_change_method: self.can_change_method(),
            banner: self.banner(),
            progress_label: self.progress_label(),
        }
    }

    /// Pick how the account will be created.
    ///
    /// Manual registration opens the first step with an empty record. A
    /// provider origin marks the wizard busy and returns the ticket the host
    /// must pass to `finish_import` once the fetch finishes.
    pub fn select_origin(&mut self, origin: RegistrationOrigin) -> Result<Option<ImportTicket>, RegistrationError> {
        self.guard_idle()?;
        if self.mode != WizardMode::Choice {
            return Err(RegistrationError::NotChoosingOrigin);
        }

        if !origin.is_provider() {
            info!("Starting manual registration");
            self.clear_flow();
            self.mode = WizardMode::Form;
            return Ok(None);
        }

        info!("Starting {} import", origin);
        let ticket = ImportTicket {
            origin,
            generation: self.generation,
        };
        self.origin = origin;
        self.error = None;
        self.pending_import = Some(ticket);
        Ok(Some(ticket))
    }

    /// Apply the outcome of a provider fetch started by `select_origin`.
    ///
    /// Returns false when the ticket no longer matches the pending import
    /// (the flow was reset in the meantime) and the result was dropped.
    pub fn finish_import(&mut self, ticket: ImportTicket, result: Result<ProviderProfile>) -> bool {
        if self.pending_import != Some(ticket) {
            debug!("Ignoring stale {} import response", ticket.origin);
            return false;
        }
        self.pending_import = None;

        match result {
            Ok(profile) => {
                let record = merge_profile(&profile);
                self.current_step = first_incomplete_step(&record);
                self.record = record;
                self.mode = WizardMode::Form;
                self.error = None;
                info!("Imported {} profile, resuming at step {}", ticket.origin, self.current_step + 1);
            }
            Err(e) => {
                warn!("Failed to import {} profile: {}", ticket.origin, e);
                self.error = Some(RegistrationError::ImportFailed {
                    origin: ticket.origin,
                    reason: e.to_string(),
                });
            }
        }
        true
    }

    /// Select an origin and, for providers, run the fetch in place
    pub fn select_origin_with(
        &mut self,
        origin: RegistrationOrigin,
        provider: &dyn ProfileProvider,
    ) -> Result<(), RegistrationError> {
        if let Some(ticket) = self.select_origin(origin)? {
            let result = provider.fetch_profile(origin);
            self.finish_import(ticket, result);
            if let Some(error @ RegistrationError::ImportFailed { .. }) = &self.error {
                return Err(error.clone());
            }
        }
        Ok(())
    }

    /// Store a new value for `field`, masked when the field has a mask
    pub fn update_field(&mut self, field: RegistrationField, value: &str) {
        let formatted = apply_formatting(field, value);
        debug!("Updating {} ({} chars)", field, formatted.chars().count());
        self.record.set(field, formatted);
    }

    /// Validate the active step and move forward, submitting on the last step
    pub fn advance(&mut self, gateway: &mut dyn RegistrationGateway) -> Result<AdvanceOutcome, RegistrationError> {
        self.guard_idle()?;
        self.guard_editing()?;

        let field = self.active_step().field;
        if self.record.is_blank(field) {
            return Err(self.fail(RegistrationError::EmptyField(field)));
        }
        self.error = None;

        if !self.is_last_step() {
            self.current_step += 1;
            return Ok(AdvanceOutcome::Moved { step: self.current_step });
        }

        let normalized = normalize_record(&self.record);
        info!("Submitting {} registration for {}", self.origin, normalized.email);
        match gateway.submit(&normalized, self.origin) {
            Ok(()) => {
                self.reset();
                Ok(AdvanceOutcome::Completed(normalized))
            }
            Err(e) => {
                warn!("Registration submission failed: {}", e);
                Err(self.fail(RegistrationError::SubmissionFailed { reason: e.to_string() }))
            }
        }
    }

    /// Go back one step; from the first step return to origin selection
    pub fn back(&mut self) -> Result<(), RegistrationError> {
        self.guard_idle()?;
        self.guard_editing()?;

        self.error = None;
        if self.current_step == 0 {
            self.mode = WizardMode::Choice;
        } else {
            self.current_step -= 1;
        }
        Ok(())
    }

    /// Return to origin selection keeping the imported draft
    pub fn change_method(&mut self) -> Result<(), RegistrationError> {
        self.guard_idle()?;
        self.guard_editing()?;
        if !self.origin.is_provider() {
            return Err(RegistrationError::ChangeMethodUnavailable);
        }

        self.error = None;
        self.mode = WizardMode::Choice;
        Ok(())
    }

    /// Abandon the flow: empty record, origin selection, no pending import
    pub fn reset(&mut self) {
        self.clear_flow();
        self.mode = WizardMode::Choice;
    }

    fn clear_flow(&mut self) {
        self.record = RegistrationRecord::default();
        self.current_step = 0;
        self.origin = RegistrationOrigin::Manual;
        self.error = None;
        self.pending_import = None;
        self.generation += 1;
    }

    fn guard_idle(&self) -> Result<(), RegistrationError> {
        if self.is_busy() {
            return Err(RegistrationError::Busy);
        }
        Ok(())
    }

    fn guard_editing(&self) -> Result<(), RegistrationError> {
        if self.mode != WizardMode::Form {
            return Err(RegistrationError::NotEditing);
        }
        Ok(())
    }

    fn fail(&mut self, error: RegistrationError) -> RegistrationError {
        if error.is_user_facing() {
            self.error = Some(error.clone());
        }
        error
    }
}

/// Build a fresh draft from the fields a provider returned
fn merge_profile(profile: &ProviderProfile) -> RegistrationRecord {
    let mut record = RegistrationRecord::default();
    for field in RegistrationField::ALL {
        if let Some(incoming) = profile.get(field) {
            record.set(field, apply_formatting(field, incoming));
        }
    }
    record
}
