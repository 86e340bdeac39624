//! # Registration Steps
//!
//! The fixed sequence of questions asked by the registration wizard. Each step
//! edits exactly one field of the draft record and carries the copy the UI needs
//! to render it.

use shared::{RegistrationField, RegistrationRecord};

/// Descriptor for one wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub field: RegistrationField,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    /// Input is masked (password entry)
    pub masked: bool,
}

pub const STEP_COUNT: usize = 6;

pub static REGISTRATION_STEPS: [WizardStep; STEP_COUNT] = [
    WizardStep {
        field: RegistrationField::FirstName,
        title: "Vamos comecar",
        description: "Qual e o seu nome?",
        placeholder: "Seu nome",
        masked: false,
    },
    WizardStep {
        field: RegistrationField::LastName,
        title: "Agora, o sobrenome",
        description: "Qual e o seu sobrenome?",
        placeholder: "Seu sobrenome",
        masked: false,
    },
    WizardStep {
        field: RegistrationField::BirthDate,
        title: "Data de nascimento",
        description: "Quando voce nasceu?",
        placeholder: "DD/MM/AAAA",
        masked: false,
    },
    WizardStep {
        field: RegistrationField::Phone,
        title: "Telefone",
        description: "Qual telefone podemos usar?",
        placeholder: "(11) 99999-0000",
        masked: false,
    },
    WizardStep {
        field: RegistrationField::Email,
        title: "E-mail de contato",
        description: "Qual e o seu e-mail principal?",
        placeholder: "seuemail@dominio.com",
        masked: false,
    },
    WizardStep {
        field: RegistrationField::Password,
        title: "Defina sua senha",
        description: "Crie uma senha segura para acessar o app.",
        placeholder: "Crie uma senha",
        masked: true,
    },
];

/// Index of the first step whose field is still blank, or the last step when
/// everything is filled
pub fn first_incomplete_step(record: &RegistrationRecord) -> usize {
    REGISTRATION_STEPS
        .iter()
        .position(|step| record.is_blank(step.field))
        .unwrap_or(STEP_COUNT - 1)
}
